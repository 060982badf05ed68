//! Screen and document geometry, shared by rendering and mouse hit-testing.
//!
//! The page is one tall document of fixed-height rows scrolled inside the
//! body area. Behaviour code works in document units (pixels of the
//! reference page); one terminal row stands for [`PX_PER_ROW`] of them.

use ratatui::layout::Rect;

use readzy_core::contact::Field;
use readzy_core::reveal::Extent;
use readzy_core::sections::SectionSpan;

/// Document units per terminal row.
pub const PX_PER_ROW: f64 = 20.0;
/// Widest the content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 72;
pub const HEADER_ROWS: u16 = 3;

const HERO_ROWS: u16 = 6;
pub const CAROUSEL_ROWS: u16 = 5;
const HEADING_ROWS: u16 = 2;
const CARD_ROWS: u16 = 3;
const STAT_ROWS: u16 = 3;
const FIELD_ROWS: u16 = 2;
const SECTION_GAP: u16 = 1;

/// A vertical run of document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    pub fn contains(self, row: u16) -> bool {
        row >= self.top && row < self.top + self.height
    }

    pub fn extent(self) -> Extent {
        Extent {
            top: f64::from(self.top) * PX_PER_ROW,
            height: f64::from(self.height) * PX_PER_ROW,
        }
    }
}

/// Header, scrolling body and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let header_h = HEADER_ROWS.min(area.height);
        let status_h = u16::from(area.height > header_h);
        let body_h = area.height.saturating_sub(header_h + status_h);
        Self {
            header: Rect::new(area.x, area.y, area.width, header_h),
            body: Rect::new(area.x, area.y + header_h, area.width, body_h),
            status: Rect::new(area.x, area.y + header_h + body_h, area.width, status_h),
        }
    }

    /// The centred content column inside the body.
    pub fn content(&self) -> Rect {
        let width = self.body.width.min(MAX_CONTENT_WIDTH);
        let x = self.body.x + (self.body.width - width) / 2;
        Rect::new(x, self.body.y, width, self.body.height)
    }
}

/// Row positions of every interactive or observed element in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<(&'static str, RowSpan)>,
    pub title_row: u16,
    pub tagline_row: u16,
    pub cta_row: u16,
    pub carousel: RowSpan,
    pub cards: Vec<RowSpan>,
    pub stats: Vec<RowSpan>,
    pub fields: [u16; 3],
    pub submit_row: u16,
    pub total_rows: u16,
}

impl PageLayout {
    pub fn compute(section_ids: &[&'static str], features: usize, stats: usize) -> Self {
        let count = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
        let mut sections = Vec::new();
        let mut row: u16 = 0;

        // home: hero + carousel
        let home_top = row;
        let title_row = row + 1;
        let tagline_row = row + 2;
        let cta_row = row + 4;
        row += HERO_ROWS;
        let carousel = RowSpan {
            top: row,
            height: CAROUSEL_ROWS,
        };
        row += CAROUSEL_ROWS + SECTION_GAP;
        sections.push((section_id(section_ids, 0), span(home_top, row)));

        // features
        let features_top = row;
        row += HEADING_ROWS;
        let cards = (0..count(features))
            .map(|i| RowSpan {
                top: row + i * CARD_ROWS,
                height: CARD_ROWS - 1,
            })
            .collect();
        row += count(features) * CARD_ROWS + SECTION_GAP;
        sections.push((section_id(section_ids, 1), span(features_top, row)));

        // stats
        let stats_top = row;
        row += HEADING_ROWS;
        let stat_spans = (0..count(stats))
            .map(|i| RowSpan {
                top: row + i * STAT_ROWS,
                height: STAT_ROWS - 1,
            })
            .collect();
        row += count(stats) * STAT_ROWS + SECTION_GAP;
        sections.push((section_id(section_ids, 2), span(stats_top, row)));

        // contact
        let contact_top = row;
        row += HEADING_ROWS;
        let fields = [row, row + FIELD_ROWS, row + 2 * FIELD_ROWS];
        row += 3 * FIELD_ROWS;
        let submit_row = row;
        row += 2 + SECTION_GAP;
        sections.push((section_id(section_ids, 3), span(contact_top, row)));

        Self {
            sections,
            title_row,
            tagline_row,
            cta_row,
            carousel,
            cards,
            stats: stat_spans,
            fields,
            submit_row,
            total_rows: row,
        }
    }

    pub fn section_row(&self, id: &str) -> Option<u16> {
        self.sections
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s.top)
    }

    /// Sections in document units, for active-section tracking.
    pub fn section_spans(&self) -> Vec<SectionSpan> {
        self.sections
            .iter()
            .map(|(id, s)| {
                let e = s.extent();
                SectionSpan::new(*id, e.top, e.height)
            })
            .collect()
    }

    pub fn field_row(&self, field: Field) -> u16 {
        match field {
            Field::Name => self.fields[0],
            Field::Email => self.fields[1],
            Field::Message => self.fields[2],
        }
    }

    pub fn carousel_title_row(&self) -> u16 {
        self.carousel.top + 1
    }

    pub fn carousel_caption_row(&self) -> u16 {
        self.carousel.top + 2
    }

    pub fn carousel_dots_row(&self) -> u16 {
        self.carousel.top + 3
    }
}

fn section_id(ids: &[&'static str], i: usize) -> &'static str {
    ids.get(i).copied().unwrap_or("")
}

fn span(top: u16, end: u16) -> RowSpan {
    RowSpan {
        top,
        height: end - top,
    }
}

/// Left padding that centres `n` indicator glyphs separated by spaces.
pub fn dots_padding(content_width: u16, n: usize) -> u16 {
    let used = u16::try_from(n.saturating_mul(2).saturating_sub(1)).unwrap_or(u16::MAX);
    content_width.saturating_sub(used) / 2
}

/// Something clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Hamburger,
    NavLink(usize),
    MenuItem(usize),
    Cta,
    CarouselPrev,
    CarouselNext,
    Indicator(usize),
    Carousel,
    Field(Field),
    Submit,
}

/// Column span of each inline nav link in the header's first row.
pub fn header_link_columns(header: Rect, labels: &[&str]) -> Vec<(u16, u16)> {
    let mut x = header.x + 14;
    labels
        .iter()
        .map(|label| {
            let width = u16::try_from(label.chars().count()).unwrap_or(0);
            let span = (x, width);
            x += width + 3;
            span
        })
        .collect()
}

/// Whether inline nav links fit next to the brand and the hamburger.
pub fn links_fit(header: Rect, labels: &[&str]) -> bool {
    header_link_columns(header, labels)
        .last()
        .is_some_and(|(x, w)| x + w + 5 <= header.x + header.width)
}

/// Column span of the hamburger control.
pub fn hamburger_columns(header: Rect) -> (u16, u16) {
    (header.x + header.width.saturating_sub(4), 3)
}

/// Area of the open dropdown menu.
pub fn dropdown_rect(screen: &ScreenLayout, items: usize) -> Rect {
    let width = 22.min(screen.body.width);
    let height = (u16::try_from(items).unwrap_or(0) + 2).min(screen.body.height);
    Rect::new(
        screen.body.x + screen.body.width - width,
        screen.body.y,
        width,
        height,
    )
}

/// Resolve a click/hover position to a target.
#[allow(clippy::too_many_arguments)]
pub fn hit_test(
    screen: &ScreenLayout,
    page: &PageLayout,
    scroll: u16,
    labels: &[&str],
    slide_count: usize,
    menu_open: bool,
    col: u16,
    row: u16,
) -> Option<Target> {
    let inside = |r: Rect| col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;

    if menu_open {
        let menu = dropdown_rect(screen, labels.len());
        if inside(menu) {
            let item = row.checked_sub(menu.y + 1)?;
            return (usize::from(item) < labels.len()).then_some(Target::MenuItem(usize::from(item)));
        }
    }

    if inside(screen.header) {
        if row != screen.header.y {
            return None;
        }
        let (hx, hw) = hamburger_columns(screen.header);
        if col >= hx && col < hx + hw {
            return Some(Target::Hamburger);
        }
        if links_fit(screen.header, labels) {
            for (i, (x, w)) in header_link_columns(screen.header, labels).into_iter().enumerate() {
                if col >= x && col < x + w {
                    return Some(Target::NavLink(i));
                }
            }
        }
        return None;
    }

    let content = screen.content();
    if !inside(content) {
        return None;
    }
    let doc_row = row - content.y + scroll;
    let x = col - content.x;

    if doc_row == page.cta_row {
        return Some(Target::Cta);
    }
    if page.carousel.contains(doc_row) {
        if doc_row == page.carousel_title_row() {
            if x < 3 {
                return Some(Target::CarouselPrev);
            }
            if x >= content.width.saturating_sub(3) {
                return Some(Target::CarouselNext);
            }
        }
        if doc_row == page.carousel_dots_row() {
            let pad = dots_padding(content.width, slide_count);
            if x >= pad && (x - pad) % 2 == 0 {
                let i = usize::from((x - pad) / 2);
                if i < slide_count {
                    return Some(Target::Indicator(i));
                }
            }
        }
        return Some(Target::Carousel);
    }
    for field in Field::ALL {
        if doc_row == page.field_row(field) {
            return Some(Target::Field(field));
        }
    }
    if doc_row == page.submit_row {
        return Some(Target::Submit);
    }
    None
}
