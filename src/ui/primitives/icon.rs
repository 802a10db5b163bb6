use crossterm::style::Stylize;

use splashpack::FileKind;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Entry,
    Bundle,
    Generate,
    Preview,
    Kind(FileKind),
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Entry) => theme::icons::ENTRY,
            (true, Icon::Bundle) => theme::icons::BUNDLE,
            (true, Icon::Generate) => theme::icons::GENERATE,
            (true, Icon::Preview) => theme::icons::PREVIEW,
            (true, Icon::Kind(kind)) => match kind {
                FileKind::Html => theme::icons::HTML,
                FileKind::Css => theme::icons::CSS,
                FileKind::Js => theme::icons::JS,
                FileKind::Image => theme::icons::IMAGE,
                FileKind::Other => theme::icons::FILE,
            },
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Entry) => theme::icons_ascii::ENTRY,
            (false, Icon::Bundle) => theme::icons_ascii::BUNDLE,
            (false, Icon::Generate) => theme::icons_ascii::GENERATE,
            (false, Icon::Preview) => theme::icons_ascii::PREVIEW,
            (false, Icon::Kind(kind)) => match kind {
                FileKind::Html => theme::icons_ascii::HTML,
                FileKind::Css => theme::icons_ascii::CSS,
                FileKind::Js => theme::icons_ascii::JS,
                FileKind::Image => theme::icons_ascii::IMAGE,
                FileKind::Other => theme::icons_ascii::FILE,
            },
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Entry => theme::colors::WARNING,
            Icon::Arrow | Icon::Kind(_) => theme::colors::DIM,
            Icon::Bundle | Icon::Generate | Icon::Preview => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
