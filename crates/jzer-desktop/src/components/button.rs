use dioxus::prelude::*;

use crate::theme::palette;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn colors(self) -> (&'static str, &'static str, &'static str) {
        let colors = palette();
        match self {
            Self::Primary => (colors.gold, colors.text_primary, colors.gold),
            Self::Secondary => (colors.bg_inverse, colors.text_inverse, colors.bg_inverse),
            Self::Destructive => (colors.error, colors.text_inverse, colors.error),
            Self::Ghost => ("transparent", colors.text_primary, colors.border),
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] style: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let (background, foreground, border) = variant.colors();
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    let opacity = if disabled { "0.55" } else { "1" };

    rsx! {
        button {
            r#type: "button",
            disabled,
            style: "
                padding: 10px 22px;
                border: 1px solid {border};
                border-radius: 4px;
                background: {background};
                color: {foreground};
                font-weight: 600;
                letter-spacing: 0.04em;
                cursor: {cursor};
                opacity: {opacity};
                transition: opacity 0.15s;
                {style}
            ",
            onclick: move |evt| {
                if !disabled {
                    onclick.call(evt);
                }
            },
            {children}
        }
    }
}
