// SPDX-License-Identifier: MPL-2.0
//! Form layout: one titled block per record section.

use super::{FormState, Message};
use crate::i18n::fluent::I18n;
use crate::record::{Field, Section};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{rule, text, text_editor, text_input, Column, Container};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
    /// Inputs are read-only when false (empty collection).
    pub editable: bool,
}

/// Renders both sections of the form.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(section(&ctx, Section::Recto))
        .push(section(&ctx, Section::Verso))
        .into()
}

fn section<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let mut col = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr(section.i18n_key())).size(typography::TITLE_SM))
        .push(rule::horizontal(1));

    for field in Field::in_section(section) {
        col = col.push(field_row(ctx, field));
    }

    Container::new(col)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

fn field_row<'a>(ctx: &ViewContext<'a>, field: Field) -> Element<'a, Message> {
    let label = text(format!("{}:", ctx.i18n.tr(field.i18n_key()))).size(typography::CAPTION);

    let input: Element<'a, Message> = match ctx.form.editor(field) {
        Some(content) => {
            let editor = text_editor(content)
                .height(Length::Fixed(sizing::MULTILINE_HEIGHT))
                .padding(spacing::XS)
                .size(typography::BODY);
            if ctx.editable {
                editor
                    .on_action(move |action| Message::Edit(field, action))
                    .into()
            } else {
                editor.into()
            }
        }
        None => {
            let input = text_input("", ctx.form.value(field))
                .padding(spacing::XS)
                .size(typography::BODY);
            if ctx.editable {
                input
                    .on_input(move |value| Message::FieldChanged(field, value))
                    .into()
            } else {
                input.into()
            }
        }
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input)
        .into()
}
