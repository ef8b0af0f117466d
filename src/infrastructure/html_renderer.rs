// HTML renderer for the tabbed viewer page
use crate::application::page_renderer::PageRenderer;
use crate::domain::panel::TabGroup;

#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PageRenderer for HtmlRenderer {
    fn render_page(&self, group: &TabGroup) -> String {
        let mut s = String::new();
        s.push_str("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Report Viewer</title><style>");
        s.push_str("body{margin:0;background:#f7fafc;color:#111827;font-family:system-ui,-apple-system,Segoe UI,Arial,sans-serif}");
        s.push_str(".tabbar{display:flex;gap:2px;border-bottom:1px solid #e5e7eb;padding:8px 8px 0 8px;background:#ffffff}");
        s.push_str(".tabbar button{border:1px solid #e5e7eb;border-bottom:none;border-radius:6px 6px 0 0;background:#eef2f7;padding:6px 14px;font-size:13px;cursor:pointer}");
        s.push_str(".tabbar button.active{background:#ffffff;font-weight:600}");
        s.push_str(".panel{display:none;padding:12px}.panel.active{display:block}");
        s.push_str(".panel iframe{border:1px solid #e5e7eb;background:#ffffff}");
        s.push_str("</style></head><body>");

        s.push_str("<div class=\"tabbar\">");
        for (i, panel) in group.panels.iter().enumerate() {
            s.push_str(&format!(
                "<button class=\"{}\" onclick=\"showTab({})\">{}</button>",
                if i == 0 { "active" } else { "" },
                i,
                escape(&panel.title)
            ));
        }
        s.push_str("</div>");

        // The source attribute carries the panel source byte-for-byte apart
        // from markup escaping; no URL rewriting happens here.
        for (i, panel) in group.panels.iter().enumerate() {
            s.push_str(&format!(
                "<div class=\"panel{}\" id=\"panel-{}\"><iframe src=\"{}\" width=\"{}\" height=\"{}\"></iframe></div>",
                if i == 0 { " active" } else { "" },
                i,
                escape(&panel.source),
                panel.width,
                panel.height
            ));
        }

        s.push_str("<script>function showTab(n){document.querySelectorAll('.tabbar button').forEach(function(b,i){b.classList.toggle('active',i===n);});document.querySelectorAll('.panel').forEach(function(p,i){p.classList.toggle('active',i===n);});}</script>");
        s.push_str("</body></html>");
        s
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::panel::Panel;

    fn gen9_group() -> TabGroup {
        TabGroup::new(vec![Panel::new(
            "Gen9 1024x1024".to_string(),
            "reports/Demo1.html".to_string(),
            1024,
            768,
        )])
    }

    #[test]
    fn test_single_panel_page_embeds_the_document_at_fixed_size() {
        let page = HtmlRenderer::new().render_page(&gen9_group());

        assert_eq!(page.matches("<iframe").count(), 1);
        assert!(page.contains("<iframe src=\"reports/Demo1.html\" width=\"1024\" height=\"768\">"));
        assert!(page.contains(">Gen9 1024x1024</button>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let renderer = HtmlRenderer::new();
        let group = gen9_group();
        assert_eq!(renderer.render_page(&group), renderer.render_page(&group));
    }

    #[test]
    fn test_first_panel_starts_visible_and_later_panels_hidden() {
        let group = TabGroup::new(vec![
            Panel::new("One".to_string(), "reports/One.html".to_string(), 800, 600),
            Panel::new("Two".to_string(), "reports/Two.html".to_string(), 800, 600),
        ]);
        let page = HtmlRenderer::new().render_page(&group);

        assert!(page.contains("<div class=\"panel active\" id=\"panel-0\">"));
        assert!(page.contains("<div class=\"panel\" id=\"panel-1\">"));
        assert_eq!(page.matches("<button").count(), 2);
    }

    #[test]
    fn test_titles_are_markup_escaped() {
        let group = TabGroup::new(vec![Panel::new(
            "A <b> & \"q\"".to_string(),
            "reports/Demo1.html".to_string(),
            1024,
            768,
        )]);
        let page = HtmlRenderer::new().render_page(&group);

        assert!(page.contains("A &lt;b&gt; &amp; &quot;q&quot;</button>"));
        assert!(!page.contains("<b> &"));
    }

    #[test]
    fn test_sources_are_not_url_encoded() {
        let group = TabGroup::new(vec![Panel::new(
            "Spaced".to_string(),
            "reports/My Report.html".to_string(),
            1024,
            768,
        )]);
        let page = HtmlRenderer::new().render_page(&group);

        assert!(page.contains("src=\"reports/My Report.html\""));
        assert!(!page.contains("%20"));
    }
}
