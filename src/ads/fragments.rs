//! Ad and analytics fragment builders.
//!
//! Pure functions from a [`TenantConfig`] to ready-to-embed markup. Every
//! builder returns an empty string when a required identifier is unset, so
//! templates can concatenate fragments unconditionally. Equal input yields
//! byte-identical output; CDN cache keys depend on that.

use crate::domain::entities::TenantConfig;

/// The five named insertion slots a page can carry.
///
/// Each fragment is complete markup or `""` (slot disabled). Recomputed per
/// request from the resolved tenant configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdFragmentSet {
    pub before_title: String,
    pub after_title: String,
    pub after_paragraph2: String,
    pub after_paragraph4: String,
    pub end_content: String,
}

/// Composes the `<head>` script block for a tenant.
///
/// Fixed order: analytics, display network loader, keeper loader, video
/// loader, display loader, then the tenant's custom block. Each section is
/// skipped when its identifier is empty.
pub fn header_scripts(cfg: &TenantConfig) -> String {
    let mut scripts = String::new();

    if !cfg.analytics_tag_id.is_empty() {
        let id = &cfg.analytics_tag_id;
        scripts.push_str(&format!(
            r#"
<script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){{dataLayer.push(arguments);}}
  gtag('js', new Date());
  gtag('config', '{id}');
</script>"#
        ));
    }

    if !cfg.ads.display_client_id.is_empty() {
        scripts.push_str(&format!(
            r#"
<script async src="https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client=ca-pub-{}" crossorigin="anonymous"></script>"#,
            cfg.ads.display_client_id
        ));
    }

    if !cfg.ads.keeper_src.is_empty() {
        scripts.push_str(&format!(
            r#"
<script src="https://jsc.adskeeper.com/site/{}.js" async></script>"#,
            cfg.ads.keeper_src
        ));
    }

    if !cfg.ads.video_script.is_empty() {
        scripts.push_str(&format!(
            r#"
<script defer src="https://videoadstech.org/ads/{}.video.js"></script>"#,
            cfg.ads.video_script
        ));
    }

    if !cfg.ads.display_script.is_empty() {
        scripts.push_str(&format!(
            r#"
<script async src="https://server.adhub.media/ads/{}.display.js"></script>"#,
            cfg.ads.display_script
        ));
    }

    if !cfg.custom_scripts.is_empty() {
        scripts.push_str(&cfg.custom_scripts);
    }

    scripts
}

/// Builds a responsive display ad unit.
///
/// Returns `""` unless both the client and the slot id are present; a
/// partial unit would break the network loader.
pub fn display_ad_unit(client_id: &str, slot_id: &str, label: &str) -> String {
    if client_id.is_empty() || slot_id.is_empty() {
        return String::new();
    }

    let label = if label.is_empty() { "Display Ad" } else { label };
    format!(
        r#"
<div class="ad-container">
<!-- {label} -->
<ins class="adsbygoogle"
     style="display:block"
     data-ad-client="ca-pub-{client_id}"
     data-ad-slot="{slot_id}"
     data-ad-format="auto"
     data-full-width-responsive="true"></ins>
<script>(adsbygoogle = window.adsbygoogle || []).push({{}});</script>
</div>"#
    )
}

/// Builds a native content widget.
pub fn native_widget(widget_id: &str) -> String {
    if widget_id.is_empty() {
        return String::new();
    }

    format!(
        r#"
<div class="ad-container">
<div data-type="_mgwidget" data-widget-id="{widget_id}"></div>
<script>(function(w,q){{w[q]=w[q]||[];w[q].push(["_mgc.load"])}})(window,"_mgq");</script>
</div>"#
    )
}

/// Derives the full fragment set for a tenant.
///
/// `before_title` is reserved and currently always empty.
pub fn fragment_set(cfg: &TenantConfig) -> AdFragmentSet {
    AdFragmentSet {
        before_title: String::new(),
        after_title: display_ad_unit(
            &cfg.ads.display_client_id,
            &cfg.ads.display_slot_primary,
            "After Title",
        ),
        after_paragraph2: display_ad_unit(
            &cfg.ads.display_client_id,
            &cfg.ads.display_slot_secondary,
            "After Paragraph 2",
        ),
        after_paragraph4: native_widget(&cfg.ads.native_widget_id),
        end_content: native_widget(&cfg.ads.native_feed_id),
    }
}
