use console::Style;
use once_cell::sync::Lazy;

pub struct Styles {
    pub index: Style,
    pub title: Style,
    pub date: Style,
    pub time: Style,
    pub preview: Style,
    pub dialog_title: Style,
}

pub static JOTPAD_STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    index: Style::new().yellow(),
    title: Style::new().bold(),
    date: Style::new().cyan(),
    time: Style::new().color256(246).italic(),
    preview: Style::new().dim(),
    dialog_title: Style::new().red().bold(),
});
