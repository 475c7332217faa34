// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style pour bouton primaire (action principale).
///
/// Pill-shaped, brand blue; grayed out while disabled so the submit gate on
/// empty drafts reads at a glance.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_700,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_100)),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style pour les déclencheurs du partage (barre "Start a post").
pub fn share_trigger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(palette::GRAY_100)),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::GRAY_500,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style pour le champ "Start a post" (pilule bordée, pleine largeur).
pub fn start_post(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(palette::GRAY_100)),
        _ => Some(Background::Color(WHITE)),
    };

    button::Style {
        background,
        text_color: palette::GRAY_500,
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the flat icon buttons on post cards and in the compose dialog.
pub fn flat(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(palette::GRAY_100)),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::GRAY_500,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the selected asset-area toggle in the compose dialog.
pub fn asset_selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_200)),
        text_color: palette::PRIMARY_700,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_grayed_out() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn flat_button_changes_on_hover() {
        let theme = Theme::Light;
        let normal = flat(&theme, button::Status::Active);
        let hover = flat(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
