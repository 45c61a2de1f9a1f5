//! Whole-document assembly and export entry points.

use crate::error::DocError;
use crate::format::format_current;
use crate::html::{SETTINGS_FILE_NAME, STYLE, code, html_escape, platforms_html, settings_doc_url};
use crate::render::{write_settings_details, write_settings_overview};
use layerconf_settings::{Layer, LayerPreset, StatusType};
use std::fs;
use std::path::Path;

/// Render the HTML documentation of `layer` into a string.
///
/// Fails when a preset value can't be resolved against the layer's settings;
/// nothing is produced in that case.
pub fn render_html_doc(layer: &Layer) -> Result<String, DocError> {
    let mut text = String::new();

    text.push_str("<!DOCTYPE html>\n");
    text.push_str("<html>\n");
    text.push_str(&format!(
        "<head><title>{}</title></head>\n",
        html_escape(&layer.key)
    ));
    text.push_str("<body>\n");
    text.push_str(STYLE);

    write_title(&mut text, layer);
    write_layer_properties(&mut text, layer);

    if !layer.settings.is_empty() {
        text.push_str("<h2><a href=\"#top\" id=\"settings\">Layer Settings Overview</a></h2>\n");
        text.push_str("<table><thead><tr>");
        text.push_str(&format!(
            "<th>Setting</th><th>Type</th><th>Default Value</th>\
             <th><a href=\"{}\">{SETTINGS_FILE_NAME}</a> Variable</th>\
             <th>Environment Variable</th><th>Supported Platforms</th>",
            html_escape(&settings_doc_url(layer))
        ));
        text.push_str("</tr></thead><tbody>\n");
        write_settings_overview(&mut text, layer, layer.settings.as_slice());
        text.push_str("</tbody></table>\n");

        text.push_str("<h2><a href=\"#top\">Layer Settings Details</a></h2>\n");
        write_settings_details(&mut text, layer, layer.settings.as_slice());
    }

    if !layer.presets.is_empty() {
        text.push_str("<h2><a href=\"#top\" id=\"presets\">Layer Presets</a></h2>\n");
        for preset in &layer.presets {
            write_preset(&mut text, layer, preset)?;
        }
    }

    text.push_str("</body>\n");
    text.push_str("</html>\n");

    Ok(text)
}

fn write_title(text: &mut String, layer: &Layer) {
    let key = html_escape(&layer.key);

    text.push_str("<h1 id=\"top\">");
    if layer.url.is_empty() {
        text.push_str(&key);
    } else {
        text.push_str(&format!(
            "<a href=\"{}\">{key}</a>",
            html_escape(&layer.url)
        ));
    }
    if layer.status != StatusType::Stable {
        text.push_str(&format!(" ({})", layer.status.as_token()));
    }
    text.push_str("</h1>\n");

    if !layer.description.is_empty() {
        text.push_str(&format!("<h3>{}</h3>\n", html_escape(&layer.description)));
    }
    if !layer.introduction.is_empty() {
        text.push_str(&format!("<p>{}</p>\n", html_escape(&layer.introduction)));
    }
}

fn write_layer_properties(text: &mut String, layer: &Layer) {
    text.push_str("<h2><a href=\"#top\">Layer Properties</a></h2>\n");
    text.push_str("<ul>\n");
    text.push_str(&format!("\t<li>API Version: {}</li>\n", layer.api_version));
    text.push_str(&format!(
        "\t<li>Implementation Version: {}</li>\n",
        html_escape(&layer.implementation_version)
    ));
    text.push_str(&format!(
        "\t<li>Layer Manifest: {}<ul>\n",
        html_escape(layer.manifest_file_name())
    ));
    text.push_str(&format!(
        "\t\t<li>File Format: {}</li>\n",
        layer.file_format_version
    ));
    text.push_str(&format!(
        "\t\t<li>Layer Binary Path: {}</li>\n",
        html_escape(&layer.binary_path)
    ));
    text.push_str("\t</ul></li>\n");
    if !layer.platforms.is_empty() {
        text.push_str(&format!(
            "\t<li>Supported Platforms: {}</li>\n",
            platforms_html(layer.platforms)
        ));
    }
    if layer.status != StatusType::Stable {
        text.push_str(&format!("\t<li>Status: {}</li>\n", layer.status.as_token()));
    }
    if !layer.settings.is_empty() {
        text.push_str(&format!(
            "\t<li><a href=\"#settings\">Number of Layer Settings: {}</a></li>\n",
            layer.settings.len()
        ));
    }
    if !layer.presets.is_empty() {
        text.push_str(&format!(
            "\t<li><a href=\"#presets\">Number of Layer Presets: {}</a></li>\n",
            layer.presets.len()
        ));
    }
    text.push_str("</ul>\n");

    if !layer.url.is_empty() {
        text.push_str(&format!(
            "<p>Visit <a href=\"{}\">{} home page</a> for more information.</p>\n",
            html_escape(&layer.url),
            html_escape(&layer.key)
        ));
    }
}

fn write_preset(text: &mut String, layer: &Layer, preset: &LayerPreset) -> Result<(), DocError> {
    text.push_str(&format!("<h3>{}</h3>\n", html_escape(&preset.label)));
    text.push_str(&format!("<p>{}</p>\n", html_escape(&preset.description)));

    text.push_str("<h4>Preset Setting Values:</h4>\n");
    text.push_str("<ul>\n");
    for data in &preset.settings {
        let meta = layer
            .find_setting(&data.key)
            .ok_or_else(|| DocError::MissingSetting {
                key: data.key.clone(),
            })?;
        if meta.setting_type() != data.setting_type() {
            return Err(DocError::TypeMismatch {
                key: data.key.clone(),
                expected: meta.setting_type(),
                found: data.setting_type(),
            });
        }

        text.push_str(&format!(
            "\t<li><a href=\"#{}-detailed\">{}</a>: {}</li>\n",
            html_escape(&meta.key),
            html_escape(&meta.label),
            code(&format_current(layer, data)?)
        ));
    }
    text.push_str("</ul>\n");

    Ok(())
}

/// Render the HTML documentation of `layer` and write it to `path`.
///
/// A write failure is returned to the caller and never panics; callers that
/// treat the export as best-effort can log it and carry on.
pub fn export_html_doc(layer: &Layer, path: &Path) -> Result<(), DocError> {
    log::info!("Exporting HTML documentation of {} to {:?}", layer.key, path);

    let text = render_html_doc(layer)?;
    fs::write(path, &text).map_err(|source| DocError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Wrote {} bytes of documentation for {} ({} presets)",
        text.len(),
        layer.key,
        layer.presets.len()
    );
    Ok(())
}

/// Plain-text settings document export.
///
/// Reserved entry point: no format is defined for it yet, so it always
/// returns [`DocError::Unsupported`] and leaves `path` untouched.
pub fn export_settings_doc(layer: &Layer, path: &Path) -> Result<(), DocError> {
    log::warn!(
        "Settings document export requested for {} at {:?}, but it is not available",
        layer.key,
        path
    );
    Err(DocError::Unsupported("Settings document export"))
}
