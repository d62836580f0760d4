use crate::store::MenuItem;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a URI component, matching `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a WhatsApp share link advertising a menu item.
///
/// Orders are placed by the customer messaging the merchant, so the link
/// carries the item summary and the storefront URL.
pub fn whatsapp_share_url(item: &MenuItem, public_url: &str) -> String {
    let message = format!(
        "*{}*\n\n{}\n\nPrice: ₹{}\nCategory: {}\n\n🛒 Order Now: {}",
        item.title, item.description, item.price, item.category, public_url
    );

    format!(
        "https://wa.me/?text={}",
        utf8_percent_encode(&message, COMPONENT)
    )
}
