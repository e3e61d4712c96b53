//! Localized string tables for report rendering
//!
//! English and Hindi are shipped; any other language code falls back to
//! English rather than failing.

/// Languages the report template ships strings for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English
    En,
    /// Hindi
    Hi,
}

impl Language {
    /// Resolve a language code, falling back to English for unknown codes
    pub fn from_code(code: &str) -> Self {
        match code {
            "hi" => Language::Hi,
            _ => Language::En,
        }
    }

    /// Human-readable language name shown in the metadata section
    pub fn display_name(code: &str) -> &str {
        match code {
            "en" => "English",
            "hi" => "Hindi",
            other => other,
        }
    }

    /// The string table for this language
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
        }
    }
}

/// Every label the report template interpolates
#[derive(Debug)]
pub struct Strings {
    /// Report title suffix
    pub title: &'static str,
    /// "Generated on" header label
    pub generated_on: &'static str,
    /// Total messages stat label
    pub total_messages: &'static str,
    /// User messages stat label
    pub user_messages: &'static str,
    /// Assistant messages stat label
    pub assistant_messages: &'static str,
    /// Attachments stat label
    pub attachments: &'static str,
    /// Average response time stat label
    pub avg_response_time: &'static str,
    /// Total duration stat label
    pub total_duration: &'static str,
    /// User role label
    pub user: &'static str,
    /// Assistant role label
    pub assistant: &'static str,
    /// User profile section heading
    pub user_profile: &'static str,
    /// Email field label
    pub email: &'static str,
    /// Username field label
    pub username: &'static str,
    /// Full name field label
    pub full_name: &'static str,
    /// Gender field label
    pub gender: &'static str,
    /// Date of birth field label
    pub date_of_birth: &'static str,
    /// Metadata section heading
    pub report_metadata: &'static str,
    /// Generated-at field label
    pub generated_at: &'static str,
    /// Language field label
    pub language: &'static str,
    /// Report version field label
    pub report_version: &'static str,
    /// Platform field label
    pub platform: &'static str,
    /// Footer attribution line
    pub generated_by: &'static str,
}

static EN: Strings = Strings {
    title: "Chat Report",
    generated_on: "Generated on",
    total_messages: "Total Messages",
    user_messages: "User Messages",
    assistant_messages: "Assistant Messages",
    attachments: "Attachments",
    avg_response_time: "Avg. Response Time",
    total_duration: "Total Duration",
    user: "User",
    assistant: "Assistant",
    user_profile: "User Profile",
    email: "Email",
    username: "Username",
    full_name: "Full Name",
    gender: "Gender",
    date_of_birth: "Date of Birth",
    report_metadata: "Report Metadata",
    generated_at: "Generated At",
    language: "Language",
    report_version: "Report Version",
    platform: "Platform",
    generated_by: "Generated by Mindful Chat",
};

static HI: Strings = Strings {
    title: "चैट रिपोर्ट",
    generated_on: "उत्पन्न तिथि",
    total_messages: "कुल संदेश",
    user_messages: "उपयोगकर्ता संदेश",
    assistant_messages: "सहायक संदेश",
    attachments: "अटैचमेंट",
    avg_response_time: "औसत प्रतिक्रिया समय",
    total_duration: "कुल अवधि",
    user: "उपयोगकर्ता",
    assistant: "सहायक",
    user_profile: "उपयोगकर्ता प्रोफ़ाइल",
    email: "ईमेल",
    username: "उपयोगकर्ता नाम",
    full_name: "पूरा नाम",
    gender: "लिंग",
    date_of_birth: "जन्म तिथि",
    report_metadata: "रिपोर्ट मेटाडेटा",
    generated_at: "उत्पन्न समय",
    language: "भाषा",
    report_version: "रिपोर्ट संस्करण",
    platform: "प्लेटफॉर्म",
    generated_by: "माइंडफुल चैट द्वारा उत्पन्न",
};
