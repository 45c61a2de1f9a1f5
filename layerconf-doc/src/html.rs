//! HTML building blocks shared by the document passes.
//!
//! This module contains:
//! - [`html_escape`]: Escape HTML special characters in text fields.
//! - [`platforms_html`]: Platform token list markup.
//! - [`settings_doc_url`]: Settings-file documentation link for a layer.

use layerconf_settings::{Layer, PlatformFlags, Version, platform_tokens};

/// Text shown for absent optional fields.
pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// Name of the settings file the settings-file variables belong to.
pub(crate) const SETTINGS_FILE_NAME: &str = "vk_layer_settings.txt";

pub(crate) const STYLE: &str = "<style>\n\
    \ta {color: #A41E22;}\n\
    \th1 {color: #A41E22;}\n\
    \th2 {color: #A41E22;}\n\
    \ttable {border: 1px solid; width: 100%; margin-left: auto; margin-right: auto;}\n\
    \ttd {border: 1px dotted;}\n\
    \t.code {color: #008000; font-family: consolas; }\n\
    \t.desc {width:50%;}\n\
    </style>\n";

const SETTINGS_DOC_MAINLINE_URL: &str =
    "https://github.com/LunarG/VulkanTools/tree/master/vkconfig#vulkan-layers-settings";

/// Newest API version documented at the unversioned mainline location.
const LAST_MAINLINE_DOC_VERSION: Version = Version::new(1, 7, 176);

/// Escape text for use in element content and quoted attribute values.
pub fn html_escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match entity(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
        out
    })
}

fn entity(c: char) -> Option<&'static str> {
    Some(match c {
        '&' => "&amp;",
        '<' => "&lt;",
        '>' => "&gt;",
        '"' => "&quot;",
        '\'' => "&#39;",
        _ => return None,
    })
}

/// `<span class="code">` wrapped text, escaped.
pub(crate) fn code(text: &str) -> String {
    format!("<span class=\"code\">{}</span>", html_escape(text))
}

/// Comma separated platform tokens, each in a code span.
pub fn platforms_html(flags: PlatformFlags) -> String {
    platform_tokens(flags)
        .into_iter()
        .map(code)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Environment variable in a code span, or `N/A` when there is none.
pub(crate) fn env_html(env: &str) -> String {
    if env.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        code(env)
    }
}

/// Link to the settings-file documentation matching the layer's API version.
///
/// Layers newer than 1.7.176 link to the SDK release tag for their API
/// version; older ones link to the mainline branch.
pub fn settings_doc_url(layer: &Layer) -> String {
    if layer.api_version > LAST_MAINLINE_DOC_VERSION {
        format!(
            "https://github.com/LunarG/VulkanTools/tree/sdk-{}.0/vkconfig#vulkan-layers-settings",
            layer.api_version
        )
    } else {
        SETTINGS_DOC_MAINLINE_URL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_setting_text() {
        assert_eq!(html_escape("<b>Fast</b>"), "&lt;b&gt;Fast&lt;/b&gt;");
        assert_eq!(html_escape("read & write"), "read &amp; write");
        assert_eq!(html_escape("the \"core\" checks"), "the &quot;core&quot; checks");
        assert_eq!(html_escape("layer's log"), "layer&#39;s log");
        assert_eq!(html_escape("khronos_validation.enable"), "khronos_validation.enable");
    }

    #[test]
    fn platforms_are_comma_separated_code_spans() {
        assert_eq!(
            platforms_html(PlatformFlags::WINDOWS | PlatformFlags::LINUX),
            "<span class=\"code\">WINDOWS</span>, <span class=\"code\">LINUX</span>"
        );
        assert_eq!(platforms_html(PlatformFlags::empty()), "");
    }

    #[test]
    fn env_falls_back_to_not_available() {
        assert_eq!(env_html(""), "N/A");
        assert_eq!(env_html("VK_FOO"), "<span class=\"code\">VK_FOO</span>");
    }

    #[test]
    fn doc_url_threshold_is_exclusive() {
        let at_threshold = Layer::new("VK_LAYER_test", Version::new(1, 7, 176));
        assert_eq!(settings_doc_url(&at_threshold), SETTINGS_DOC_MAINLINE_URL);

        let above = Layer::new("VK_LAYER_test", Version::new(1, 7, 177));
        assert_eq!(
            settings_doc_url(&above),
            "https://github.com/LunarG/VulkanTools/tree/sdk-1.7.177.0/vkconfig#vulkan-layers-settings"
        );

        let older = Layer::new("VK_LAYER_test", Version::new(1, 3, 250));
        assert_eq!(settings_doc_url(&older), SETTINGS_DOC_MAINLINE_URL);
    }
}
