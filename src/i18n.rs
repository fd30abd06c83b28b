use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
}

/// Translatable UI labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Dashboard,
    TaskLog,
    PathControl,
    Settings,
    Start,
    Stop,
    Emergency,
    Battery,
    AreaCovered,
    TimeRemaining,
    Idle,
    Working,
    Fault,
    Progress,
    Export,
    Theme,
    Notifications,
    Voice,
    Camera,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Tamil];

    /// Parses a language name as typed on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "hindi" | "hi" => Some(Language::Hindi),
            "tamil" | "ta" => Some(Language::Tamil),
            _ => None,
        }
    }

    pub fn translate(&self, label: Label) -> &'static str {
        match self {
            Language::English => match label {
                Label::Dashboard => "Dashboard",
                Label::TaskLog => "Task Log",
                Label::PathControl => "Path & Control",
                Label::Settings => "Settings",
                Label::Start => "Start",
                Label::Stop => "Stop",
                Label::Emergency => "Emergency Stop",
                Label::Battery => "Battery",
                Label::AreaCovered => "Area Covered",
                Label::TimeRemaining => "Time Remaining",
                Label::Idle => "Idle",
                Label::Working => "Working",
                Label::Fault => "Error",
                Label::Progress => "Progress",
                Label::Export => "Export",
                Label::Theme => "Theme",
                Label::Notifications => "Notifications",
                Label::Voice => "Voice Command",
                Label::Camera => "Capture Photo",
            },
            Language::Hindi => match label {
                Label::Dashboard => "डैशबोर्ड",
                Label::TaskLog => "कार्य रिकॉर्ड",
                Label::PathControl => "पथ नियंत्रण",
                Label::Settings => "सेटिंग्स",
                Label::Start => "शुरू करें",
                Label::Stop => "रोकें",
                Label::Emergency => "आपातकालीन स्टॉप",
                Label::Battery => "बैटरी",
                Label::AreaCovered => "कवर क्षेत्र",
                Label::TimeRemaining => "समय शेष",
                Label::Idle => "निष्क्रिय",
                Label::Working => "कार्यरत",
                Label::Fault => "त्रुटि",
                Label::Progress => "प्रगति",
                Label::Export => "निर्यात",
                Label::Theme => "थीम",
                Label::Notifications => "सूचनाएं",
                Label::Voice => "आवाज़ आदेश",
                Label::Camera => "फोटो लें",
            },
            Language::Tamil => match label {
                Label::Dashboard => "டாஷ்போர்டு",
                Label::TaskLog => "பணி பதிவு",
                Label::PathControl => "பாதை கட்டுப்பாடு",
                Label::Settings => "அமைப்புகள்",
                Label::Start => "தொடங்கு",
                Label::Stop => "நிறுத்து",
                Label::Emergency => "அவசரநிலை நிறுத்தம்",
                Label::Battery => "பேட்டரி",
                Label::AreaCovered => "மூடப்பட்ட பகுதி",
                Label::TimeRemaining => "மீதமுள்ள நேரம்",
                Label::Idle => "செயலற்றது",
                Label::Working => "வேலை செய்கிறது",
                Label::Fault => "பிழை",
                Label::Progress => "முன்னேற்றம்",
                Label::Export => "ஏற்றுமதி",
                Label::Theme => "தீம்",
                Label::Notifications => "அறிவிப்புகள்",
                Label::Voice => "குரல் கட்டளை",
                Label::Camera => "புகைப்படம் எடு",
            },
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Hindi => write!(f, "Hindi"),
            Language::Tamil => write!(f, "Tamil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Language::from_name("Tamil"), Some(Language::Tamil));
        assert_eq!(Language::from_name(" hi "), Some(Language::Hindi));
        assert_eq!(Language::from_name("klingon"), None);
    }

    #[test]
    fn test_translate() {
        assert_eq!(Language::English.translate(Label::Emergency), "Emergency Stop");
        assert_eq!(Language::Hindi.translate(Label::Battery), "बैटरी");
        assert_eq!(Language::Tamil.translate(Label::Start), "தொடங்கு");
        assert_eq!(Language::English.translate(Label::Fault), "Error");
        assert_eq!(Language::Hindi.translate(Label::Voice), "आवाज़ आदेश");
    }
}
