//! Pre-order passes over a settings tree.
//!
//! Both passes skip groups and hidden settings but always descend into
//! children, so a visible setting under a hidden parent is still documented.

use crate::format::format_default;
use crate::html::{
    NOT_AVAILABLE, SETTINGS_FILE_NAME, code, env_html, html_escape, platforms_html,
    settings_doc_url,
};
use layerconf_settings::{Layer, SettingMeta, SettingView, StatusType};

/// Append one overview table row per documented setting.
pub fn write_settings_overview(text: &mut String, layer: &Layer, settings: &[SettingMeta]) {
    log::debug!("Writing settings overview of {}", layer.key);
    let prefix = layer.setting_prefix();
    write_overview_rows(text, &prefix, settings);
}

fn write_overview_rows(text: &mut String, prefix: &str, settings: &[SettingMeta]) {
    for meta in settings {
        if meta.is_documented() {
            let key = html_escape(&meta.key);
            text.push_str("<tr>\n");
            text.push_str(&format!(
                "\t<td><a id=\"{key}\" href=\"#{key}-detailed\">{}</a></td>\n",
                html_escape(&meta.label)
            ));
            text.push_str(&format!(
                "\t<td>{}</td>\n",
                code(meta.setting_type().as_token())
            ));
            text.push_str(&format!("\t<td>{}</td>\n", code(&format_default(meta))));
            text.push_str(&format!(
                "\t<td>{}</td>\n",
                code(&format!("{prefix}{}", meta.key))
            ));
            text.push_str(&format!("\t<td>{}</td>\n", env_html(&meta.env)));
            text.push_str(&format!(
                "\t<td>{}</td>\n",
                platforms_html(meta.platform_flags)
            ));
            text.push_str("</tr>\n");
        }

        write_overview_rows(text, prefix, &meta.children);
    }
}

/// Append one detail section per documented setting.
pub fn write_settings_details(text: &mut String, layer: &Layer, settings: &[SettingMeta]) {
    let prefix = layer.setting_prefix();
    let doc_url = settings_doc_url(layer);
    log::debug!("Writing settings details of {} (docs at {doc_url})", layer.key);
    write_detail_sections(text, &prefix, &doc_url, settings);
}

fn write_detail_sections(text: &mut String, prefix: &str, doc_url: &str, settings: &[SettingMeta]) {
    for meta in settings {
        if meta.is_documented() {
            write_detail_section(text, prefix, doc_url, meta);
        }

        write_detail_sections(text, prefix, doc_url, &meta.children);
    }
}

fn write_detail_section(text: &mut String, prefix: &str, doc_url: &str, meta: &SettingMeta) {
    let key = html_escape(&meta.key);
    let label = html_escape(&meta.label);

    if meta.status == StatusType::Stable {
        text.push_str(&format!(
            "<h3><a id=\"{key}-detailed\" href=\"#{key}\">{label}</a></h3>\n"
        ));
    } else {
        text.push_str(&format!(
            "<h3><a id=\"{key}-detailed\" href=\"#{key}\">{label}</a> ({})</h3>\n",
            meta.status.as_token()
        ));
    }

    text.push_str(&format!("\t<p>{}</p>\n", html_escape(&meta.description)));

    text.push_str("<h4>Setting Properties:</h4>\n");
    text.push_str("<ul>\n");
    text.push_str(&format!(
        "\t<li><a href=\"{}\">{SETTINGS_FILE_NAME}</a> Variable: {}</li>\n",
        html_escape(doc_url),
        code(&format!("{prefix}{}", meta.key))
    ));
    let env = if meta.env.is_empty() {
        NOT_AVAILABLE
    } else {
        meta.env.as_str()
    };
    text.push_str(&format!("\t<li>Environment Variable: {}</li>\n", code(env)));
    text.push_str(&format!(
        "\t<li>Platforms Supported: {}</li>\n",
        platforms_html(meta.platform_flags)
    ));
    if meta.view != SettingView::Standard {
        text.push_str(&format!("\t<li>Setting Level: {}</li>\n", meta.view.as_token()));
    }
    text.push_str("</ul>\n");

    text.push_str(&format!(
        "\t<p>Setting Type: {} - Setting Default Value: {}</p>\n",
        code(meta.setting_type().as_token()),
        code(&format_default(meta))
    ));

    if let Some(values) = meta.enum_values() {
        text.push_str("<table>\n");
        text.push_str(
            "<thead><tr><th>Enum Value</th><th>Label</th><th class=\"desc\">Description</th>\
             <th>Platforms Supported</th></tr></thead>\n",
        );
        text.push_str("<tbody>\n");
        // Enum values list the platforms of the setting they belong to.
        let platforms = platforms_html(meta.platform_flags);
        for value in values.iter().filter(|value| !value.view.is_hidden()) {
            text.push_str("<tr>\n");
            text.push_str(&format!("\t<td>{}</td>\n", html_escape(&value.key)));
            text.push_str(&format!("\t<td>{}</td>\n", html_escape(&value.label)));
            if value.description.is_empty() {
                text.push_str(&format!("\t<td>{NOT_AVAILABLE}</td>\n"));
            } else {
                text.push_str(&format!(
                    "\t<td class=\"desc\">{}</td>\n",
                    html_escape(&value.description)
                ));
            }
            text.push_str(&format!("\t<td>{platforms}</td>\n"));
            text.push_str("</tr>\n");
        }
        text.push_str("</tbody></table>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerconf_settings::{
        BoolMeta, EnumMeta, FlagsMeta, PlatformFlags, SettingEnumValue, SettingKind, Version,
    };

    fn bool_setting(key: &str) -> SettingMeta {
        SettingMeta::new(key, SettingKind::Bool(BoolMeta { default_value: true }))
            .with_label(key.to_uppercase())
    }

    fn layer(settings: Vec<SettingMeta>) -> Layer {
        Layer::new("VK_LAYER_KHRONOS_validation", Version::new(1, 3, 250)).with_settings(settings)
    }

    #[test]
    fn hidden_parent_does_not_hide_children() {
        let layer = layer(vec![
            bool_setting("hidden_parent")
                .with_view(SettingView::Hidden)
                .with_children(vec![bool_setting("visible_child")]),
        ]);

        let mut overview = String::new();
        write_settings_overview(&mut overview, &layer, layer.settings.as_slice());
        assert!(!overview.contains("hidden_parent"));
        assert!(overview.contains("id=\"visible_child\""));

        let mut details = String::new();
        write_settings_details(&mut details, &layer, layer.settings.as_slice());
        assert!(!details.contains("hidden_parent"));
        assert!(details.contains("id=\"visible_child-detailed\""));
    }

    #[test]
    fn groups_produce_no_rows() {
        let layer = layer(vec![SettingMeta::group("area", vec![bool_setting("inner")])]);

        let mut overview = String::new();
        write_settings_overview(&mut overview, &layer, layer.settings.as_slice());
        assert_eq!(overview.matches("<tr>").count(), 1);
        assert!(!overview.contains("id=\"area\""));
    }

    #[test]
    fn overview_row_columns() {
        let layer = layer(vec![bool_setting("enable_foo").with_env("VK_FOO")]);

        let mut overview = String::new();
        write_settings_overview(&mut overview, &layer, layer.settings.as_slice());
        assert!(overview.contains("<a id=\"enable_foo\" href=\"#enable_foo-detailed\">ENABLE_FOO</a>"));
        assert!(overview.contains("<td><span class=\"code\">BOOL</span></td>"));
        assert!(overview.contains("<td><span class=\"code\">TRUE</span></td>"));
        assert!(overview.contains("<td><span class=\"code\">khronos_validation.enable_foo</span></td>"));
        assert!(overview.contains("<td><span class=\"code\">VK_FOO</span></td>"));
    }

    #[test]
    fn detail_marks_status_and_view() {
        let layer = layer(vec![
            bool_setting("beta_setting")
                .with_status(StatusType::Beta)
                .with_view(SettingView::Advanced),
        ]);

        let mut details = String::new();
        write_settings_details(&mut details, &layer, layer.settings.as_slice());
        assert!(details.contains("BETA_SETTING</a> (BETA)</h3>"));
        assert!(details.contains("<li>Setting Level: ADVANCED</li>"));
        assert!(details.contains("Environment Variable: <span class=\"code\">N/A</span>"));
    }

    #[test]
    fn enum_table_skips_hidden_values() {
        let layer = layer(vec![SettingMeta::new(
            "mode",
            SettingKind::Enum(EnumMeta {
                enum_values: vec![
                    SettingEnumValue::new("fast", "Fast").with_description("Skip checks"),
                    SettingEnumValue::new("secret", "Secret").with_view(SettingView::Hidden),
                    SettingEnumValue::new("full", "Full"),
                ],
                default_value: "fast".into(),
            }),
        )]);

        let mut details = String::new();
        write_settings_details(&mut details, &layer, layer.settings.as_slice());
        assert!(details.contains("<td>fast</td>"));
        assert!(details.contains("<td class=\"desc\">Skip checks</td>"));
        assert!(details.contains("<td>full</td>"));
        assert!(!details.contains("secret"));
        assert_eq!(details.matches("<td>N/A</td>").count(), 1);
    }

    #[test]
    fn detail_pass_is_idempotent() {
        let layer = layer(vec![SettingMeta::group(
            "g",
            vec![bool_setting("a"), bool_setting("b")],
        )]);

        let mut first = String::new();
        write_settings_details(&mut first, &layer, layer.settings.as_slice());
        let mut second = String::new();
        write_settings_details(&mut second, &layer, layer.settings.as_slice());
        assert_eq!(first, second);
    }

    #[test]
    fn enum_rows_list_the_setting_platforms() {
        let layer = layer(vec![
            SettingMeta::new(
                "mode",
                SettingKind::Enum(EnumMeta {
                    enum_values: vec![
                        SettingEnumValue::new("mobile", "Mobile")
                            .with_platforms(PlatformFlags::ANDROID),
                    ],
                    default_value: "mobile".into(),
                }),
            )
            .with_platforms(PlatformFlags::WINDOWS),
        ]);

        let mut details = String::new();
        write_settings_details(&mut details, &layer, layer.settings.as_slice());
        assert!(details.contains(
            "<td>mobile</td>\n\t<td>Mobile</td>\n\t<td>N/A</td>\n\t<td><span class=\"code\">WINDOWS</span></td>"
        ));
        assert!(!details.contains("ANDROID"));
    }

    #[test]
    fn flags_settings_get_a_value_table() {
        let layer = layer(vec![SettingMeta::new(
            "report_flags",
            SettingKind::Flags(FlagsMeta {
                enum_values: vec![
                    SettingEnumValue::new("error", "Error"),
                    SettingEnumValue::new("warn", "Warning").with_description("Warnings too"),
                ],
                default_value: vec!["error".into()],
            }),
        )]);

        let mut details = String::new();
        write_settings_details(&mut details, &layer, layer.settings.as_slice());
        assert_eq!(details.matches("<th>Enum Value</th>").count(), 1);
        assert!(details.contains("<td>error</td>\n\t<td>Error</td>"));
        assert!(details.contains("<td>warn</td>\n\t<td>Warning</td>"));
        assert!(details.contains("<td class=\"desc\">Warnings too</td>"));
    }

    #[test]
    fn overview_row_ends_with_platforms() {
        let layer = layer(vec![
            bool_setting("enable_foo").with_platforms(PlatformFlags::LINUX | PlatformFlags::ANDROID),
        ]);

        let mut overview = String::new();
        write_settings_overview(&mut overview, &layer, layer.settings.as_slice());
        assert!(overview.ends_with(
            "\t<td><span class=\"code\">LINUX</span>, <span class=\"code\">ANDROID</span></td>\n</tr>\n"
        ));
    }
}
