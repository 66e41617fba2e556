//! Lookup of colors by name.

use std::sync::OnceLock;

use hashbrown::HashMap;

use super::names::NAMED_COLORS;
use super::Color;
use crate::error::{ColorError, Result};
use crate::util::normalize_name;

static TABLE: OnceLock<HashMap<String, Color>> = OnceLock::new();

fn table() -> &'static HashMap<String, Color> {
    TABLE.get_or_init(|| {
        let table: HashMap<_, _> = NAMED_COLORS
            .iter()
            .map(|&(name, hex)| (normalize_name(name), Color::hex(hex)))
            .collect();
        tracing::debug!(count = table.len(), "populated named color table");
        table
    })
}

#[cfg_attr(docsrs, doc(cfg(feature = "named")))]
impl Color {
    /// Looks up a color by name.
    ///
    /// Case, spaces, hyphens, underscores, apostrophes and periods are ignored,
    /// so `"Dark Slate-Gray"` finds `darkslategray`.
    ///
    /// ```
    /// # use pufferfish_color::Color;
    /// assert_eq!(Color::named("Red").unwrap(), Color::RED);
    /// assert!(Color::named("blurple").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Color> {
        table()
            .get(normalize_name(name).as_str())
            .copied()
            .ok_or_else(|| ColorError::InvalidName(name.to_owned()))
    }

    /// Like [`named`](Color::named), but logs the error and returns
    /// [`Color::default`] when no color has that name.
    pub fn named_lossy(name: &str) -> Color {
        Color::named(name).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default color");
            Color::default()
        })
    }

    /// Returns an iterator over every built-in color name and its value.
    pub fn named_colors() -> impl Iterator<Item = (&'static str, Color)> {
        NAMED_COLORS
            .iter()
            .map(|&(name, hex)| (name, Color::hex(hex)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let red = Color::named("red").unwrap();
        assert_eq!(red, Color::RED);
        for name in ["Red", "RED", "r-e-d", " red ", "r_e.d", "'red'"] {
            assert_eq!(Color::named(name).unwrap(), red, "{name}");
        }
    }

    #[test]
    fn test_multi_word() {
        let expected = Color::hex(0x2f4f4fff);
        for name in ["darkslategray", "Dark Slate Gray", "dark-slate_gray"] {
            assert_eq!(Color::named(name).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            Color::named("Not A Color"),
            Err(ColorError::InvalidName("Not A Color".to_owned()))
        );
        assert!(Color::named("").is_err());
    }

    #[test]
    fn test_error_message_names_input() {
        let err = Color::named("blurple").unwrap_err();
        assert_eq!(err.to_string(), "invalid color name: blurple");
    }

    #[test]
    fn test_lossy() {
        assert_eq!(Color::named_lossy("blurple"), Color::default());
        assert_eq!(Color::named_lossy("Blue"), Color::BLUE);
    }

    #[test]
    fn test_table_entries_are_in_range() {
        for (name, c) in Color::named_colors() {
            for v in <[f32; 4]>::from(c) {
                assert!((0. ..=1.).contains(&v), "{name}");
            }
        }
    }

    #[test]
    fn test_table_keys_are_unique() {
        assert_eq!(table().len(), NAMED_COLORS.len());
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Color::named("white")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(Color::WHITE));
        }
    }
}
