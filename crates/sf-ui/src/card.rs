use crate::Component;
use crate::html::escape;

/// A bordered content container.
///
/// `title` is text and gets escaped. `body` and `footer` are HTML fragments
/// inserted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub title: Option<String>,
    pub body: String,
    pub footer: Option<String>,
}

impl Card {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

impl Component for Card {
    fn render(&self) -> String {
        let mut html = String::from(r#"<div class="card">"#);
        if let Some(title) = &self.title {
            html.push_str(&format!(
                r#"<div class="card-header"><h3 class="card-title">{}</h3></div>"#,
                escape(title)
            ));
        }
        html.push_str(&format!(r#"<div class="card-body">{}</div>"#, self.body));
        if let Some(footer) = &self.footer {
            html.push_str(&format!(r#"<div class="card-footer">{footer}</div>"#));
        }
        html.push_str("</div>");
        html
    }
}
