// SPDX-License-Identifier: MPL-2.0
//! Overlay stack for the compose dialog.
//!
//! The dismissal contract mirrors a DOM `target == currentTarget` check: the
//! backdrop is the outermost overlay element and carries the only press
//! handler, while the dialog content is layered above it as an opaque
//! widget. A press on the dialog is consumed before it can reach the
//! backdrop's mouse area, so only presses landing on the backdrop itself
//! produce the dismiss message.

use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

/// Stacks `dialog` over `base` behind a dimmed, click-to-dismiss backdrop.
///
/// `on_backdrop` is emitted only for presses on the backdrop, never for
/// presses on the dialog content.
pub fn overlay<'a, M>(
    base: Element<'a, M>,
    dialog: Element<'a, M>,
    on_backdrop: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let backdrop = center(opaque(dialog)).style(styles::container::backdrop);

    stack![base, opaque(mouse_area(backdrop).on_press(on_backdrop))].into()
}
