// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::form::{self, FormState};
use crate::ui::image_pane::{self, ImagePanes};
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navbar: navbar::ViewContext<'a>,
    pub form: &'a FormState,
    pub images: &'a ImagePanes,
    pub image_width: u32,
    pub notifications: &'a notifications::Manager,
}

/// Navbar on top, then the scans and the form in one scrollable column,
/// with toasts floating above.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let editable = ctx.navbar.has_items;
    let navbar = navbar::view(ctx.navbar).map(Message::Navbar);

    let scans: Element<'_, Message> = image_pane::view(ctx.images, ctx.i18n, ctx.image_width);
    let form = form::view(form::ViewContext {
        i18n: ctx.i18n,
        form: ctx.form,
        editable,
    })
    .map(Message::Form);

    let body = scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::MD)
            .push(scans)
            .push(form),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(body);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}
