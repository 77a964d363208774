//! App Configuration
//!
//! Compile-time settings. There is no server and no config file; everything
//! the page needs is fixed at build time.

use log::LevelFilter;

/// Session storage key holding the serialized pizza list
pub const STORAGE_KEY: &str = "pizza";

/// Directory the pizza photos and icons are served from
pub const IMAGE_DIR: &str = "images";

/// Extension of the photo files under `IMAGE_DIR`
pub const PHOTO_EXT: &str = "png";

/// Icon repeated once per heat level in the menu table
pub const PEPPER_ICON: &str = "images/pepper.png";

/// Valid heat range (inclusive)
pub const MIN_HEAT: i32 = 1;
pub const MAX_HEAT: i32 = 3;

pub const MIN_TOPPINGS: usize = 2;

/// Topping options: (value, label)
pub const TOPPINGS: &[(&str, &str)] = &[
    ("tomato", "Tomato"),
    ("cheese", "Cheese"),
    ("mushrooms", "Mushrooms"),
    ("ham", "Ham"),
    ("salami", "Salami"),
    ("olives", "Olives"),
    ("onion", "Onion"),
    ("chili", "Chili"),
    ("pineapple", "Pineapple"),
];

/// Photo options: (value, label). The value resolves to `images/{value}.png`.
pub const PHOTOS: &[(&str, &str)] = &[
    ("pizza1", "Photo 1"),
    ("pizza2", "Photo 2"),
    ("pizza3", "Photo 3"),
    ("pizza4", "Photo 4"),
];

pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
