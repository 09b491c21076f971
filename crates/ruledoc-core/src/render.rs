use crate::pattern::{BugPattern, Suppressibility};

/// Build the full page text for one bug pattern, without the stitched
/// examples.
///
/// The page is assembled with plain string formatting so the generated text
/// is byte-stable across runs and locales. When `generate_front_matter` is
/// set, a YAML metadata block consumed by the static site generator is
/// prepended.
pub fn render_page(pattern: &BugPattern, generate_front_matter: bool) -> String {
    let mut page = String::new();

    if generate_front_matter {
        page.push_str(&format!(
            "---\n\
             title: {name}\n\
             layout: bugpattern\n\
             category: {category}\n\
             severity: {severity}\n\
             maturity: {maturity}\n\
             ---\n\n",
            name = pattern.name,
            category = pattern.category,
            severity = pattern.severity,
            maturity = pattern.maturity,
        ));
    }

    page.push_str(&format!(
        "<div style=\"float:right;\"><table id=\"metadata\">\n\
         <tr><td>Category</td><td>{category}</td></tr>\n\
         <tr><td>Severity</td><td>{severity}</td></tr>\n\
         <tr><td>Maturity</td><td>{maturity}</td></tr>\n\
         </table></div>\n\n\
         # Bug pattern: {name}\n\
         __{summary}__\n",
        category = pattern.category,
        severity = pattern.severity,
        maturity = pattern.maturity,
        name = pattern.name,
        summary = pattern.summary,
    ));

    if !pattern.alt_names.is_empty() {
        page.push_str(&format!("\n_Alternate names: {}_\n", pattern.alt_names));
    }

    page.push_str(&format!(
        "\n## The problem\n{}\n\n## Suppression\n",
        pattern.explanation
    ));

    match pattern.suppressibility {
        Suppressibility::SuppressWarnings => {
            page.push_str(&format!(
                "Suppress false positives by adding an `@SuppressWarnings(\"{}\")` \
                 annotation to the enclosing element.\n",
                pattern.name
            ));
        }
        Suppressibility::CustomAnnotation => {
            page.push_str(&format!(
                "Suppress false positives by adding the custom suppression annotation \
                 `@{}` to the enclosing element.\n",
                pattern.custom_suppression_annotation
            ));
        }
        Suppressibility::Unsuppressible => {
            page.push_str("This check may not be suppressed.\n");
        }
    }

    page
}
