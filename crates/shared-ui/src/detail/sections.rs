use shared_types::{Judgment, JudgmentRecord};

/// Body text for a section whose field is missing or blank.
pub const NOT_AVAILABLE: &str = "Not available";

/// The seven always-rendered body sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodySection {
    Issue,
    LawPoints,
    Headnotes,
    Held,
    Facts,
    Contentions,
    Disposition,
}

pub const BODY_SECTIONS: [BodySection; 7] = [
    BodySection::Issue,
    BodySection::LawPoints,
    BodySection::Headnotes,
    BodySection::Held,
    BodySection::Facts,
    BodySection::Contentions,
    BodySection::Disposition,
];

impl BodySection {
    pub fn title(&self) -> &'static str {
        match self {
            BodySection::Issue => "Issue",
            BodySection::LawPoints => "Law Points",
            BodySection::Headnotes => "Headnotes",
            BodySection::Held => "Held",
            BodySection::Facts => "Facts",
            BodySection::Contentions => "Contentions of Parties",
            BodySection::Disposition => "Disposition",
        }
    }

    /// Element id the tab scrolls to.
    pub fn anchor(&self) -> &'static str {
        match self {
            BodySection::Issue => "section-issue",
            BodySection::LawPoints => "section-law-points",
            BodySection::Headnotes => "section-headnotes",
            BodySection::Held => "section-held",
            BodySection::Facts => "section-facts",
            BodySection::Contentions => "section-contentions",
            BodySection::Disposition => "section-disposition",
        }
    }

    pub fn field<'a>(&self, record: &'a JudgmentRecord) -> Option<&'a str> {
        match self {
            BodySection::Issue => record.issue.as_deref(),
            BodySection::LawPoints => record.law_points.as_deref(),
            BodySection::Headnotes => record.headnotes.as_deref(),
            BodySection::Held => record.held.as_deref(),
            BodySection::Facts => record.facts.as_deref(),
            BodySection::Contentions => record.contentions.as_deref(),
            BodySection::Disposition => record.disposition.as_deref(),
        }
    }
}

/// Sections rendered after the body only when their own field has content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingSection {
    FullJudgment,
    CaseNotes,
}

impl TrailingSection {
    pub fn title(&self) -> &'static str {
        match self {
            TrailingSection::FullJudgment => "Full Judgment",
            TrailingSection::CaseNotes => "Case Notes",
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            TrailingSection::FullJudgment => "section-full-judgment",
            TrailingSection::CaseNotes => "section-case-notes",
        }
    }

    pub fn field<'a>(&self, record: &'a JudgmentRecord) -> Option<&'a str> {
        match self {
            TrailingSection::FullJudgment => record.judgment_text.as_deref(),
            TrailingSection::CaseNotes => record.case_notes.as_deref(),
        }
    }
}

/// One rendered section: header, anchor and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub title: &'static str,
    pub anchor: &'static str,
    pub body: String,
    /// `false` when `body` is the placeholder.
    pub available: bool,
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).unwrap_or_default().is_empty()
}

/// Non-blank and not a lone punctuation mark such as `"."` or `"-"`.
pub fn has_content(value: Option<&str>) -> bool {
    let trimmed = value.map(str::trim).unwrap_or_default();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(c), None) => !c.is_ascii_punctuation(),
        _ => true,
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    if is_blank(value) {
        NOT_AVAILABLE.to_string()
    } else {
        value.unwrap_or_default().trim().to_string()
    }
}

pub fn body_sections(record: &JudgmentRecord) -> Vec<SectionView> {
    BODY_SECTIONS
        .iter()
        .map(|section| {
            let value = section.field(record);
            SectionView {
                title: section.title(),
                anchor: section.anchor(),
                body: or_placeholder(value),
                available: !is_blank(value),
            }
        })
        .collect()
}

pub fn trailing_sections(record: &JudgmentRecord) -> Vec<SectionView> {
    [TrailingSection::FullJudgment, TrailingSection::CaseNotes]
        .iter()
        .filter(|section| has_content(section.field(record)))
        .map(|section| SectionView {
            title: section.title(),
            anchor: section.anchor(),
            body: or_placeholder(section.field(record)),
            available: true,
        })
        .collect()
}

/// Label/value pairs for the judgment header card.
pub fn header_fields(record: &JudgmentRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Citation", or_placeholder(record.citation.as_deref())),
        ("Court", or_placeholder(record.court.as_deref())),
        ("Appellant", or_placeholder(record.appellant.as_deref())),
        ("Respondent", or_placeholder(record.respondent.as_deref())),
        ("Case No.", or_placeholder(record.case_no.as_deref())),
        ("Date", or_placeholder(record.date.as_deref())),
    ]
}

/// Page heading, e.g. `State of Kerala v. N. M. Thomas`.
pub fn case_title(judgment: &Judgment) -> String {
    let record = &judgment.record;
    match (
        has_content(record.appellant.as_deref()),
        has_content(record.respondent.as_deref()),
    ) {
        (true, true) => format!(
            "{} v. {}",
            or_placeholder(record.appellant.as_deref()),
            or_placeholder(record.respondent.as_deref())
        ),
        _ if has_content(record.citation.as_deref()) => or_placeholder(record.citation.as_deref()),
        _ => format!("Judgment #{}", judgment.id),
    }
}

/// Highlighted tab. Advisory only: all sections are always rendered and the
/// highlight may drift from the scroll position when the reader scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNav {
    active: BodySection,
}

impl Default for SectionNav {
    fn default() -> Self {
        Self {
            active: BodySection::Issue,
        }
    }
}

impl SectionNav {
    pub fn active(&self) -> BodySection {
        self.active
    }

    pub fn is_active(&self, section: BodySection) -> bool {
        self.active == section
    }

    /// Highlight `section` and return the anchor to scroll to.
    pub fn select(&mut self, section: BodySection) -> &'static str {
        self.active = section;
        section.anchor()
    }
}

/// JS that smooth-scrolls to `anchor`. Success is not checked.
pub fn scroll_script(anchor: &str) -> String {
    let target = serde_json::to_string(anchor).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"const el = document.getElementById({target});
        if (el) {{ el.scrollIntoView({{ behavior: "smooth", block: "start" }}); }}"#
    )
}
