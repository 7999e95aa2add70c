use crate::models::Combination;

/// Heading line of every shared combo.
pub const SHARE_HEADING: &str = "Check out this Domino's Meal Combo:";

/// Render a combination as the plain-text share message.
///
/// One `name - ₹price` line per item, followed by a blank line and the total.
pub fn share_message(combination: &Combination) -> String {
    let mut message = String::new();
    message.push_str(SHARE_HEADING);
    message.push_str("\n\n");

    for item in combination {
        message.push_str(&format!("{} - ₹{}\n", item.name, item.price));
    }

    message.push_str(&format!("\nTotal: ₹{}", combination.total_price()));
    message
}
