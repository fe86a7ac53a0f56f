use crossterm::style::Color;

use crate::ui::text::{visible_width, ColoredText};
use crate::ui::theme::{borders, borders_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Bordered table sized to its widest cells
#[derive(Debug, Default, Clone)]
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<ColoredText>>,
}

struct Frame {
    tl: &'static str,
    tr: &'static str,
    bl: &'static str,
    br: &'static str,
    h: &'static str,
    v: &'static str,
    tee_down: &'static str,
    tee_up: &'static str,
    tee_right: &'static str,
    tee_left: &'static str,
    cross: &'static str,
}

impl Frame {
    fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                tl: borders::TOP_LEFT,
                tr: borders::TOP_RIGHT,
                bl: borders::BOTTOM_LEFT,
                br: borders::BOTTOM_RIGHT,
                h: borders::HORIZONTAL,
                v: borders::VERTICAL,
                tee_down: borders::TEE_DOWN,
                tee_up: borders::TEE_UP,
                tee_right: borders::TEE_RIGHT,
                tee_left: borders::TEE_LEFT,
                cross: borders::CROSS,
            }
        } else {
            Self {
                tl: borders_ascii::TOP_LEFT,
                tr: borders_ascii::TOP_RIGHT,
                bl: borders_ascii::BOTTOM_LEFT,
                br: borders_ascii::BOTTOM_RIGHT,
                h: borders_ascii::HORIZONTAL,
                v: borders_ascii::VERTICAL,
                tee_down: borders_ascii::TEE_DOWN,
                tee_up: borders_ascii::TEE_UP,
                tee_right: borders_ascii::TEE_RIGHT,
                tee_left: borders_ascii::TEE_LEFT,
                cross: borders_ascii::CROSS,
            }
        }
    }
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers
                .into_iter()
                .map(|h| (h.into(), Align::Left))
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Right-align column `index` (numbers, prices)
    pub fn align(mut self, index: usize, align: Align) -> Self {
        if let Some(col) = self.headers.get_mut(index) {
            col.1 = align;
        }
        self
    }

    pub fn add_row(&mut self, cells: Vec<ColoredText>) {
        self.rows.push(cells);
    }

    pub fn add_plain_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .push(cells.into_iter().map(ColoredText::plain).collect());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let f = Frame::new(supports_unicode);
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, (h, _))| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c.text()))
                    .chain(std::iter::once(visible_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| f.h.repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };

        let mut out = String::new();
        out.push_str(&rule(f.tl, f.tee_down, f.tr));

        let header_cells: Vec<ColoredText> = self
            .headers
            .iter()
            .map(|(h, _)| ColoredText::plain(h.clone()).bold())
            .collect();
        out.push_str(&self.render_line(&header_cells, &widths, &f, supports_color));
        out.push_str(&rule(f.tee_right, f.cross, f.tee_left));

        for row in &self.rows {
            out.push_str(&self.render_line(row, &widths, &f, supports_color));
        }
        out.push_str(&rule(f.bl, f.tee_up, f.br));
        out
    }

    fn render_line(
        &self,
        cells: &[ColoredText],
        widths: &[usize],
        f: &Frame,
        supports_color: bool,
    ) -> String {
        let mut line = String::from(f.v);
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i);
            let text = cell.map(|c| c.render(supports_color)).unwrap_or_default();
            let pad = width.saturating_sub(cell.map(|c| visible_width(c.text())).unwrap_or(0));
            let align = self.headers.get(i).map(|h| h.1).unwrap_or_default();
            line.push(' ');
            match align {
                Align::Left => {
                    line.push_str(&text);
                    line.push_str(&" ".repeat(pad));
                }
                Align::Right => {
                    line.push_str(&" ".repeat(pad));
                    line.push_str(&text);
                }
            }
            line.push(' ');
            line.push_str(f.v);
        }
        line.push('\n');
        line
    }
}

/// One-cell helper for colored values
pub fn cell(text: impl Into<String>, color: Option<Color>) -> ColoredText {
    match color {
        Some(c) => ColoredText::colored(text, c),
        None => ColoredText::plain(text),
    }
}
