//! Bootstrapping widgets on a host page.
//!
//! The loader runs once per page:
//!
//! 1. Derive the resource origin from the loader's own `<script>` tag, or
//!    fall back to the page origin.
//! 2. Load the stylesheet and the widget bundle from that origin.
//! 3. Mount one widget per placeholder through the factory it was given.
//!
//! Failures never abort the pass. If the resources cannot be loaded every
//! placeholder shows a generic error; if one widget cannot be constructed
//! only its placeholder does, and the others still mount.

use kbw_client::{Asset, AssetLoader, Url};
use kbw_config::LoaderConfig;
use kbw_protocol::{Theme, attr};
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};

use crate::container::{Container, HtmlContainer};
use crate::dom::Element;
use crate::error::{Result, WidgetError};
use crate::views::render_load_failure;

/// Shown in every placeholder when the resources fail to load.
pub const RESOURCES_FAILED: &str = "Failed to load widget resources";

/// Shown in a placeholder whose widget could not be constructed.
pub const INITIALIZATION_FAILED: &str = "Failed to initialize widget";

/// The parts of a host page the loader works with.
///
/// Parsing extracts plain data up front, so a `HostPage` can be held across
/// await points.
#[derive(Debug, Clone)]
pub struct HostPage {
    page_url: Url,
    script_sources: Vec<Url>,
    placeholders: Vec<HtmlContainer>,
}

impl HostPage {
    /// Parses a host page served from `page_url`.
    ///
    /// Placeholders are the elements matching `selector`; script sources
    /// are resolved against the page URL.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidUrl`] if `page_url` is not absolute and
    /// [`WidgetError::InvalidSelector`] if `selector` does not parse.
    pub fn parse(html: &str, page_url: &str, selector: &str) -> Result<Self> {
        let page_url = Url::parse(page_url).map_err(|e| WidgetError::InvalidUrl {
            url: page_url.to_string(),
            reason: e.to_string(),
        })?;
        let placeholder_selector = parse_selector(selector)?;
        let script_selector = parse_selector("script[src]")?;

        let document = Html::parse_document(html);

        let script_sources = document
            .select(&script_selector)
            .filter_map(|script| script.value().attr("src"))
            .filter_map(|src| page_url.join(src).ok())
            .collect();

        let placeholders = document
            .select(&placeholder_selector)
            .map(|element| {
                element.value().attrs().fold(
                    HtmlContainer::new(element.value().name()),
                    |container, (name, value)| container.with_attribute(name, value),
                )
            })
            .collect();

        Ok(Self {
            page_url,
            script_sources,
            placeholders,
        })
    }

    #[must_use]
    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    #[must_use]
    pub fn placeholders(&self) -> &[HtmlContainer] {
        &self.placeholders
    }

    /// Returns the origin widget resources are served from.
    ///
    /// This is the origin of the first script whose path ends with
    /// `loader_path`, or the page origin if there is none.
    #[must_use]
    pub fn resource_origin(&self, loader_path: &str) -> String {
        self.script_sources
            .iter()
            .find(|src| src.path().ends_with(loader_path))
            .unwrap_or(&self.page_url)
            .origin()
            .ascii_serialization()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| WidgetError::InvalidSelector(selector.to_string()))
}

/// Absolute URLs of the resources a page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    origin: String,
    stylesheet: Url,
    script: Url,
}

impl Resources {
    /// Resolves the configured resource paths on `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidUrl`] if a resulting URL does not parse.
    pub fn new(origin: &str, config: &LoaderConfig) -> Result<Self> {
        let origin = origin.trim_end_matches('/').to_string();
        let resolve = |path: &str| {
            let url = format!("{origin}{path}");
            Url::parse(&url).map_err(|e| WidgetError::InvalidUrl {
                url: url.clone(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            stylesheet: resolve(&config.stylesheet_path)?,
            script: resolve(&config.script_path)?,
            origin,
        })
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn stylesheet(&self) -> &Url {
        &self.stylesheet
    }

    #[must_use]
    pub fn script(&self) -> &Url {
        &self.script
    }

    /// Returns the tags injected into the host page head.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbw_config::LoaderConfig;
    /// use kbw_widget::loader::Resources;
    ///
    /// let resources = Resources::new("https://kb.example.com", &LoaderConfig::default()).unwrap();
    /// assert_eq!(
    ///     resources.head_markup(),
    ///     r#"<link rel="stylesheet" href="https://kb.example.com/widget.css"><script src="https://kb.example.com/widget.js" async=""></script>"#
    /// );
    /// ```
    #[must_use]
    pub fn head_markup(&self) -> String {
        let link = Element::new("link")
            .attr("rel", "stylesheet")
            .attr("href", self.stylesheet.as_str());
        let script = Element::new("script")
            .attr("src", self.script.as_str())
            .attr("async", "");
        format!("{link}{script}")
    }
}

/// The result of mounting one placeholder.
#[derive(Debug)]
pub enum Mount<W> {
    /// A widget was constructed.
    Ready(W),
    /// The placeholder shows an error instead.
    Failed(HtmlContainer),
}

impl<W> Mount<W> {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Mounts widgets on host pages.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parses a host page with the configured placeholder selector.
    ///
    /// # Errors
    ///
    /// See [`HostPage::parse`].
    pub fn parse_page(&self, html: &str, page_url: &str) -> Result<HostPage> {
        HostPage::parse(html, page_url, &self.config.selector)
    }

    /// Resolves the resources of `page`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidUrl`] if the derived origin cannot carry
    /// the resource paths (e.g. a `file:` page without a loader script).
    pub fn resources(&self, page: &HostPage) -> Result<Resources> {
        Resources::new(&page.resource_origin(&self.config.loader_path), &self.config)
    }

    /// Loads the stylesheet, then the bundle.
    ///
    /// # Errors
    ///
    /// Returns the first load failure.
    #[instrument(skip_all, fields(origin = %resources.origin()))]
    pub async fn load_resources(
        &self,
        resources: &Resources,
        assets: &dyn AssetLoader,
    ) -> kbw_client::Result<()> {
        assets
            .load_asset(resources.stylesheet(), Asset::Stylesheet)
            .await?;
        assets.load_asset(resources.script(), Asset::Script).await?;
        debug!("widget resources loaded");
        Ok(())
    }

    /// Loads the resources and mounts a widget on every placeholder.
    ///
    /// `factory` receives each placeholder and the resource origin. Mounts
    /// are returned in document order.
    pub async fn initialize<W, F>(
        &self,
        page: HostPage,
        assets: &dyn AssetLoader,
        mut factory: F,
    ) -> Vec<Mount<W>>
    where
        F: FnMut(HtmlContainer, &str) -> Result<W>,
    {
        let resources = match self.resources(&page) {
            Ok(resources) => resources,
            Err(error) => {
                warn!(%error, "cannot resolve widget resources");
                return fail_all(page.placeholders, RESOURCES_FAILED);
            }
        };
        if let Err(error) = self.load_resources(&resources, assets).await {
            warn!(%error, "failed to load widget resources");
            return fail_all(page.placeholders, RESOURCES_FAILED);
        }

        let mounts: Vec<Mount<W>> = page
            .placeholders
            .into_iter()
            .map(|container| match factory(container.clone(), resources.origin()) {
                Ok(widget) => Mount::Ready(widget),
                Err(error) => {
                    warn!(%error, "widget initialization failed");
                    Mount::Failed(show_failure(container, INITIALIZATION_FAILED))
                }
            })
            .collect();

        info!(
            mounted = mounts.iter().filter(|m| m.is_ready()).count(),
            total = mounts.len(),
            "widgets initialized"
        );
        mounts
    }
}

fn fail_all<W>(placeholders: Vec<HtmlContainer>, message: &str) -> Vec<Mount<W>> {
    placeholders
        .into_iter()
        .map(|container| Mount::Failed(show_failure(container, message)))
        .collect()
}

fn show_failure(mut container: HtmlContainer, message: &str) -> HtmlContainer {
    container.set_inner_html(render_load_failure(message).to_html());
    container
}

/// Returns the markup a host page embeds to show a widget.
///
/// # Examples
///
/// ```
/// use kbw_protocol::Theme;
/// use kbw_widget::loader::embed_snippet;
///
/// let code = embed_snippet("kb-1", Theme::Dark, "https://kb.example.com", "/loader.js");
/// assert!(code.contains(r#"data-knowledge-base="kb-1""#));
/// assert!(code.contains(r#"src="https://kb.example.com/loader.js""#));
/// ```
#[must_use]
pub fn embed_snippet(knowledge_base_id: &str, theme: Theme, origin: &str, loader_path: &str) -> String {
    let placeholder = Element::new("div")
        .attr(attr::MARKER, "")
        .attr(attr::KNOWLEDGE_BASE, knowledge_base_id)
        .attr(attr::THEME, theme.class_name());
    let script = Element::new("script")
        .attr("src", format!("{}{loader_path}", origin.trim_end_matches('/')))
        .attr("async", "");
    format!("<!-- Knowledge Base Widget -->\n{placeholder}\n{script}")
}
