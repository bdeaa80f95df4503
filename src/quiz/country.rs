/// The fixed country catalogue the quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Estonia,
    France,
    Germany,
    Ireland,
    Italy,
    Nigeria,
    Poland,
    Russia,
    Spain,
    Uk,
    Us,
}

impl Country {
    pub const ALL: [Country; 11] = [
        Country::Estonia,
        Country::France,
        Country::Germany,
        Country::Ireland,
        Country::Italy,
        Country::Nigeria,
        Country::Poland,
        Country::Russia,
        Country::Spain,
        Country::Uk,
        Country::Us,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Country::Estonia => "Estonia",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Ireland => "Ireland",
            Country::Italy => "Italy",
            Country::Nigeria => "Nigeria",
            Country::Poland => "Poland",
            Country::Russia => "Russia",
            Country::Spain => "Spain",
            Country::Uk => "UK",
            Country::Us => "US",
        }
    }

    /// Regional-indicator flag for terminals with emoji support.
    pub fn flag(self) -> &'static str {
        match self {
            Country::Estonia => "\u{1F1EA}\u{1F1EA}",
            Country::France => "\u{1F1EB}\u{1F1F7}",
            Country::Germany => "\u{1F1E9}\u{1F1EA}",
            Country::Ireland => "\u{1F1EE}\u{1F1EA}",
            Country::Italy => "\u{1F1EE}\u{1F1F9}",
            Country::Nigeria => "\u{1F1F3}\u{1F1EC}",
            Country::Poland => "\u{1F1F5}\u{1F1F1}",
            Country::Russia => "\u{1F1F7}\u{1F1FA}",
            Country::Spain => "\u{1F1EA}\u{1F1F8}",
            Country::Uk => "\u{1F1EC}\u{1F1E7}",
            Country::Us => "\u{1F1FA}\u{1F1F8}",
        }
    }
}
