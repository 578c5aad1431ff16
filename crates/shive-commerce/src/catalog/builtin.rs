//! Built-in S-Hive product data.

use crate::catalog::{Category, Product};

type Row = (u32, &'static str, u64, Category, &'static str, &'static str, f64, &'static str);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    (1, "Rose Gold Serum", 2999, Category::Beauty, "beauty.png", "ROSE", 4.5, "Hydrating facial serum with vitamin C"),
    (2, "Beauty Glow Cream", 3499, Category::Beauty, "beauty1.png", "Glow", 4.6, "Radiance boosting day cream"),
    (3, "Matte Lipstick Set", 2499, Category::Beauty, "makeup.png", "ColorPop", 4.4, "Set of 3 long-lasting matte lipsticks"),
    (4, "Silk Shampoo", 1999, Category::Beauty, "shampoo.png", "KANE CARE", 4.3, "Sulfate-free nourishing shampoo"),
    (5, "Winter Sale Coat", 8999, Category::Fashion, "coat.png", "Urban", 4.2, "Warm wool-blend winter coat"),
    (6, "Casual Shirt", 3999, Category::Fashion, "shirt.png", "Lh", 4.0, "Cotton casual shirt for men"),
    (7, "Slim Fit Jeans", 4999, Category::Fashion, "pant.png", "Denim Co", 4.3, "Classic blue slim fit jeans"),
    (8, "Elegant Dress", 7999, Category::Fashion, "fashion.png", "Elegance", 4.7, "Evening party dress"),
    (9, "Trending Shoe", 2999, Category::Fashion, "fashion1.png", "Trendy", 4.1, "Latest Trending Shoe"),
    (10, "NIKE FLYKNIT", 14999, Category::Shoes, "shoe1.png", "Nike", 4.8, "Premium running shoes"),
    (11, "Classic Sneakers", 5999, Category::Shoes, "shoe.png", "Sporty", 4.4, "Everyday casual sneakers"),
    (12, "Basketball", 2999, Category::Sports, "sport.png", "Pro", 4.5, "Official size basketball"),
    (13, "Cricket Bat & Ball", 3499, Category::Sports, "sport1.png", "Grip", 4.4, "Professional cricket set with leather ball"),
    (14, "Tennis Racket", 2499, Category::Sports, "sport2.png", "Flex", 4.3, "Lightweight tennis racket"),
    (15, "Mountain Bicycle", 14999, Category::Sports, "sport3.png", "Hydro", 4.2, "21-speed mountain bicycle"),
    (16, "Training Kit", 7999, Category::Sports, "sports.png", "Active", 4.6, "Complete sports training set"),
    (17, "Hair Dryer Pro", 4999, Category::Electronics, "dryer.png", "Style", 4.3, "Professional ionic hair dryer"),
    (18, "Wireless Headphones", 6999, Category::Electronics, "hp.png", "HP", 4.6, "Noise cancelling Bluetooth headphones"),
    (19, "Gaming Laptop", 39999, Category::Electronics, "laptop.png", "Case", 4.2, "High performance gaming laptop"),
    (20, "Smartphone", 59999, Category::Electronics, "phone.png", "Tech", 4.7, "5G smartphone"),
    (21, "Smart Watch", 19999, Category::Electronics, "watch.png", "Wear", 4.5, "Fitness tracking smart watch"),
    (22, "Sunglasses", 8999, Category::Electronics, "glasses.png", "Vision", 4.3, "UV protection sunglasses"),
    (23, "Pressure Cooker", 7999, Category::Kitchen, "kitchen.png", "Chef", 4.6, "5-liter stainless steel pressure cooker"),
    (24, "Electric Kitchen Mixer", 3499, Category::Kitchen, "kitchen1.png", "Cook", 4.4, "Handheld electric mixer with 5 speeds"),
    (25, "Mixer Grinder", 8999, Category::Kitchen, "kitchen2.png", "Home", 4.5, "500W mixer grinder"),
    (26, "Non-Stick Pan Set", 14999, Category::Kitchen, "kitchen3.png", "Kitchen", 4.7, "3-piece non-stick frying pan set"),
    (27, "Utensils Set", 4999, Category::Kitchen, "kitchens.png", "HomeChef", 4.3, "Complete kitchen utensils set"),
];

/// The built-in products in catalog order.
pub(crate) fn products() -> Vec<Product> {
    ROWS.iter()
        .map(|&(id, name, price, category, image, brand, rating, description)| {
            Product::new(id, name, price, category)
                .with_image(image)
                .with_brand(brand)
                .with_rating(rating)
                .with_description(description)
        })
        .collect()
}
