use crate::{
    ImageEffect, blur_effect::GaussianBlurConfig, monochrome_effect::ThresholdConfig,
    stylized_effect::CartoonConfig,
};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The filters offered by the menu, numbered in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum FilterKind {
    Grayscale = 1,
    BlackWhite,
    Cartoon,
    Negative,
    Contour,
    Blur,
}

/// A numeric parameter the user is asked for before applying a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamPrompt {
    pub label: &'static str,
    pub default: u32,
}

impl FilterKind {
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Grayscale => "Grayscale",
            FilterKind::BlackWhite => "Black and White",
            FilterKind::Cartoon => "Cartoon",
            FilterKind::Negative => "Negative",
            FilterKind::Contour => "Contour",
            FilterKind::Blur => "Blurred",
        }
    }

    /// Lower-case, underscore separated name used for generated file names.
    pub fn slug(&self) -> String {
        self.name().replace(' ', "_").to_lowercase()
    }

    pub fn param_prompt(&self) -> Option<ParamPrompt> {
        match self {
            FilterKind::BlackWhite => Some(ParamPrompt {
                label: "Enter the threshold (0-255)",
                default: crate::monochrome_effect::DEFAULT_THRESHOLD as u32,
            }),
            FilterKind::Blur => Some(ParamPrompt {
                label: "Enter the blur radius (1-10)",
                default: crate::blur_effect::DEFAULT_BLUR_RADIUS,
            }),
            _ => None,
        }
    }

    /// Parses a menu choice such as `"3"`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        choice
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|n| Self::try_from(n).ok())
    }

    /// Builds the effect, `param` is the raw user answer to `param_prompt`.
    pub fn effect(&self, param: Option<&str>) -> ImageEffect {
        let param = param.unwrap_or_default();
        match self {
            FilterKind::Grayscale => ImageEffect::Grayscale,
            FilterKind::BlackWhite => ImageEffect::Threshold(ThresholdConfig::from_input(param)),
            FilterKind::Cartoon => ImageEffect::Cartoon(CartoonConfig::new()),
            FilterKind::Negative => ImageEffect::Negative,
            FilterKind::Contour => ImageEffect::Contour,
            FilterKind::Blur => ImageEffect::GaussianBlur(GaussianBlurConfig::from_input(param)),
        }
    }

    pub fn all() -> &'static [FilterKind] {
        &[
            FilterKind::Grayscale,
            FilterKind::BlackWhite,
            FilterKind::Cartoon,
            FilterKind::Negative,
            FilterKind::Contour,
            FilterKind::Blur,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbering() {
        for (i, kind) in FilterKind::all().iter().enumerate() {
            let n: u8 = (*kind).into();
            assert_eq!(n as usize, i + 1);
            assert_eq!(FilterKind::from_choice(&n.to_string()), Some(*kind));
        }

        assert_eq!(FilterKind::from_choice("0"), None);
        assert_eq!(FilterKind::from_choice("7"), None);
        assert_eq!(FilterKind::from_choice("blur"), None);
    }

    #[test]
    fn test_slug() {
        assert_eq!(FilterKind::BlackWhite.slug(), "black_and_white");
        assert_eq!(FilterKind::Blur.slug(), "blurred");
    }

    #[test]
    fn test_param_defaults() {
        match FilterKind::Blur.effect(Some("nope")) {
            ImageEffect::GaussianBlur(config) => assert_eq!(config.radius, 5),
            other => panic!("unexpected effect {other:?}"),
        }

        match FilterKind::Blur.effect(None) {
            ImageEffect::GaussianBlur(config) => assert_eq!(config.radius, 5),
            other => panic!("unexpected effect {other:?}"),
        }

        match FilterKind::BlackWhite.effect(Some("42")) {
            ImageEffect::Threshold(config) => assert_eq!(config.threshold, 42),
            other => panic!("unexpected effect {other:?}"),
        }

        assert!(FilterKind::Cartoon.param_prompt().is_none());
        assert_eq!(FilterKind::BlackWhite.param_prompt().unwrap().default, 128);
    }
}
