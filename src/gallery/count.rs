// SPDX-License-Identifier: MPL-2.0
//! Human-readable image count.

use crate::i18n::fluent::I18n;

/// Image count bucketed by the form of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCount {
    Empty,
    One,
    Many(usize),
}

impl From<usize> for ImageCount {
    fn from(count: usize) -> Self {
        match count {
            0 => ImageCount::Empty,
            1 => ImageCount::One,
            n => ImageCount::Many(n),
        }
    }
}

impl ImageCount {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ImageCount::Empty => "gallery-count-empty",
            ImageCount::One => "gallery-count-one",
            ImageCount::Many(_) => "gallery-count-many",
        }
    }

    #[must_use]
    pub fn label(self, i18n: &I18n) -> String {
        match self {
            ImageCount::Many(n) => {
                let count = n.to_string();
                i18n.tr_with_args(self.i18n_key(), &[("count", count.as_str())])
            }
            ImageCount::Empty | ImageCount::One => i18n.tr(self.i18n_key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    #[test]
    fn buckets_follow_count() {
        assert_eq!(ImageCount::from(0), ImageCount::Empty);
        assert_eq!(ImageCount::from(1), ImageCount::One);
        assert_eq!(ImageCount::from(2), ImageCount::Many(2));
    }

    #[test]
    fn english_labels() {
        let i18n = english();
        assert_eq!(ImageCount::from(0).label(&i18n), "no images yet");
        assert_eq!(ImageCount::from(1).label(&i18n), "1 image uploaded");
        assert_eq!(ImageCount::from(5).label(&i18n), "5 images uploaded");
    }

    #[test]
    fn french_labels_are_translated() {
        let i18n = I18n::new(Some("fr".into()), &Config::default());
        assert_eq!(ImageCount::from(0).label(&i18n), "aucune image pour l'instant");
        assert_eq!(ImageCount::from(3).label(&i18n), "3 images importées");
    }
}
