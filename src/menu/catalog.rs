use std::sync::LazyLock;

use crate::models::MenuItem;

/// (name, price, calories, carbs, protein, fat)
type RawItem = (&'static str, i64, u32, u32, u32, u32);

#[rustfmt::skip]
const BUILTIN_ITEMS: &[RawItem] = &[
    // Pizzas
    ("Margherita", 200, 250, 30, 10, 9),
    ("Pepperoni", 250, 300, 35, 15, 12),
    ("Veggie Paradise", 220, 270, 40, 8, 7),
    ("Cheese Burst", 300, 350, 40, 18, 20),
    ("Farmhouse", 280, 300, 35, 12, 10),
    ("Chicken Dominator", 350, 400, 45, 25, 15),
    ("Paneer Makhani", 270, 320, 35, 15, 10),
    ("Spicy Chicken", 320, 360, 40, 18, 20),
    ("Tandoori Veg", 240, 270, 35, 7, 5),
    ("Tandoori Chicken", 330, 380, 42, 28, 18),
    ("Double Cheese Margherita", 310, 360, 38, 20, 16),
    ("Mexican Green Wave", 290, 340, 36, 18, 14),
    ("Chicken Golden Delight", 249, 350, 40, 25, 22),
    ("Non-Veg Supreme", 319, 390, 42, 30, 18),
    ("Veg Extravaganza", 260, 320, 35, 12, 9),
    ("Pepper Barbecue Chicken & Onion", 229, 330, 37, 22, 15),
    ("Chicken Sausage", 189, 270, 25, 12, 14),
    ("Chicken Pepperoni", 319, 380, 43, 30, 20),
    ("Chicken Fiesta", 249, 330, 35, 20, 16),
    ("Indi Chicken Tikka", 319, 360, 40, 28, 18),
    ("Keema Do Pyaza", 189, 240, 30, 18, 10),

    // Sides
    ("Garlic Breadsticks", 100, 160, 35, 6, 7),
    ("Stuffed Garlic Bread", 150, 220, 40, 10, 12),
    ("Paneer Zingy Parcel", 120, 200, 28, 8, 10),
    ("Chicken Wings", 180, 300, 20, 25, 22),
    ("Potato Wedges", 90, 150, 30, 2, 5),
    ("Chicken Pepperoni Stuffed Garlic Bread", 200, 250, 35, 12, 16),
    ("Veg Pasta Italiano White", 130, 200, 38, 6, 7),
    ("Non-Veg Pasta Italiano White", 160, 240, 40, 18, 10),
    ("Veg Pasta Italiano Red", 130, 220, 37, 7, 8),
    ("Non-Veg Pasta Italiano Red", 160, 250, 40, 19, 11),

    // Desserts
    ("Choco Lava Cake", 110, 200, 30, 2, 10),
    ("Butterscotch Mousse Cake", 140, 250, 35, 3, 12),
    ("New York Cheesecake", 170, 280, 38, 4, 14),
    ("Dark Fantasy", 120, 180, 28, 3, 9),
    ("Chocolate Brownie", 100, 230, 32, 5, 11),
    ("Vanilla Ice Cream", 80, 120, 18, 4, 5),
    ("Strawberry Ice Cream", 80, 120, 18, 4, 5),
    ("Chocolate Ice Cream", 80, 140, 22, 4, 6),

    // Beverages
    ("Pepsi 500ml", 60, 150, 40, 0, 0),
    ("Mirinda 500ml", 60, 150, 40, 0, 0),
    ("7Up 500ml", 60, 140, 37, 0, 0),
    ("Mountain Dew 500ml", 60, 150, 40, 0, 0),
    ("Water Bottle 1L", 40, 0, 0, 0, 0),
    ("Iced Tea", 70, 120, 30, 0, 0),
    ("Cold Coffee", 90, 180, 40, 2, 4),
    ("Orange Juice", 80, 150, 35, 1, 0),
    ("Mango Juice", 80, 160, 38, 1, 0),

    // Combos
    ("Meal for 2: 2 Medium Pizzas + Garlic Bread + Pepsi", 800, 1000, 130, 25, 40),
    ("Meal for 4: 4 Medium Pizzas + Stuffed Garlic Bread + Pepsi", 1500, 1800, 240, 50, 70),
    ("Snack Combo: Garlic Bread + Potato Wedges + Pepsi", 300, 500, 70, 12, 18),
    ("Dessert Combo: Choco Lava Cake + Brownie + Ice Cream", 250, 550, 70, 9, 30),
    ("Family Combo: 1 Large Pizza + 1 Medium Pizza + Garlic Bread + Pepsi", 1200, 1500, 190, 45, 55),
];

static BUILTIN_MENU: LazyLock<Vec<MenuItem>> = LazyLock::new(|| {
    BUILTIN_ITEMS
        .iter()
        .map(|&(name, price, calories, carbs, protein, fat)| {
            MenuItem::new(name, price, calories, carbs, protein, fat)
        })
        .collect()
});

/// The compiled-in menu, in listing order.
pub fn builtin_menu() -> &'static [MenuItem] {
    &BUILTIN_MENU
}
