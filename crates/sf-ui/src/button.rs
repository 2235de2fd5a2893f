use crate::Component;
use crate::html::{classes, escape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Outline => "btn-outline",
            Self::Ghost => "btn-ghost",
            Self::Destructive => "btn-destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

/// A button, or a link styled as one when `href` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub href: Option<String>,
    pub disabled: bool,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub const fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Component for Button {
    fn render(&self) -> String {
        let class = classes(&[
            "btn",
            self.variant.class(),
            self.size.class(),
            if self.disabled { "btn-disabled" } else { "" },
        ]);
        let label = escape(&self.label);

        match (&self.href, self.disabled) {
            (Some(href), false) => {
                format!(r#"<a class="{class}" href="{}">{label}</a>"#, escape(href))
            }
            // A disabled link drops its target.
            (Some(_), true) => format!(r#"<a class="{class}" aria-disabled="true">{label}</a>"#),
            (None, false) => format!(r#"<button type="button" class="{class}">{label}</button>"#),
            (None, true) => {
                format!(r#"<button type="button" class="{class}" disabled>{label}</button>"#)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_button() {
        assert_eq!(
            Button::new("Add to cart").render(),
            r#"<button type="button" class="btn btn-primary btn-md">Add to cart</button>"#
        );
    }

    #[rstest]
    #[case(ButtonVariant::Secondary, ButtonSize::Sm, "btn btn-secondary btn-sm")]
    #[case(ButtonVariant::Outline, ButtonSize::Lg, "btn btn-outline btn-lg")]
    #[case(ButtonVariant::Ghost, ButtonSize::Md, "btn btn-ghost btn-md")]
    #[case(ButtonVariant::Destructive, ButtonSize::Sm, "btn btn-destructive btn-sm")]
    fn variant_and_size_classes(
        #[case] variant: ButtonVariant,
        #[case] size: ButtonSize,
        #[case] expected: &str,
    ) {
        let html = Button::new("x").variant(variant).size(size).render();
        assert!(html.contains(&format!(r#"class="{expected}""#)), "{html}");
    }

    #[test]
    fn link_button_escapes_href() {
        let html = Button::new("Shop").href("/search?q=a&b").render();
        assert_eq!(
            html,
            r#"<a class="btn btn-primary btn-md" href="/search?q=a&amp;b">Shop</a>"#
        );
    }

    #[test]
    fn disabled_link_has_no_target() {
        let html = Button::new("Sold out").href("/p/1").disabled(true).render();
        assert!(!html.contains("href"));
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(html.contains("btn-disabled"));
    }

    #[test]
    fn disabled_button_sets_attribute() {
        let html = Button::new("Wait").disabled(true).render();
        assert!(html.ends_with(" disabled>Wait</button>"));
    }

    #[test]
    fn label_is_escaped() {
        let html = Button::new("<b>Buy</b>").render();
        assert!(html.contains("&lt;b&gt;Buy&lt;/b&gt;"));
    }
}
