//! Document bundler
//!
//! Turns an entry HTML document plus its uploaded assets into one
//! self-contained document:
//! 1. Parse the entry file
//! 2. Inline `<link rel=stylesheet>` as `<style>`, keeping its `media`
//! 3. Inline `<script src>` text
//! 4. Inline `<img src>` as data URIs
//! 5. Inject the overlay (styles, markup, auto-hide wrapper)
//! 6. Serialize with a doctype
//!
//! Matched elements are collected and all reads happen in a planning pass;
//! the tree is only mutated afterwards, in document order. A reference that
//! cannot be resolved or read is left untouched and recorded in the report.

use kuchikiki::traits::*;
use kuchikiki::{Attribute, ElementData, ExpandedName, NodeDataRef, NodeRef};

use super::auto_hide::{wrapper_script, MIN_DISPLAY_MS, OVERLAY_ROOT_ID};
use super::readers::{read_as_data_uri, read_as_text};
use super::resolver::{is_inlinable_ref, resolve};
use crate::domain::entities::{FileRegistry, OverlayData, UploadedFile};
use crate::error::{ReadError, SplashError, SplashResult};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Options for a bundle run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleOptions {
    pub min_display_ms: u64,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            min_display_ms: MIN_DISPLAY_MS,
        }
    }
}

/// Which tag a reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Stylesheet,
    Script,
    Image,
}

impl RefKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefKind::Stylesheet => "stylesheet",
            RefKind::Script => "script",
            RefKind::Image => "image",
        }
    }
}

/// What happened to one reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefOutcome {
    /// Replaced by the content of the named file
    Inlined { file: String },
    /// No uploaded file with that basename
    Unresolved,
    /// Resolved, but reading the file failed
    Unreadable { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    pub kind: RefKind,
    pub reference: String,
    pub outcome: RefOutcome,
}

/// Per-reference account of a bundle run, in document order per tag kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleReport {
    pub references: Vec<ReferenceRecord>,
    /// Whether the overlay markup contains an element with [`OVERLAY_ROOT_ID`]
    pub overlay_root_found: bool,
}

impl BundleReport {
    pub fn inlined_count(&self) -> usize {
        self.count(|o| matches!(o, RefOutcome::Inlined { .. }))
    }

    pub fn unresolved_count(&self) -> usize {
        self.count(|o| matches!(o, RefOutcome::Unresolved))
    }

    pub fn unreadable_count(&self) -> usize {
        self.count(|o| matches!(o, RefOutcome::Unreadable { .. }))
    }

    fn count(&self, pred: impl Fn(&RefOutcome) -> bool) -> usize {
        self.references.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// A finished bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub html: String,
    pub report: BundleReport,
}

/// Mutation decided during planning
enum Edit {
    ReplaceWithStyle {
        link: NodeRef,
        css: String,
        media: Option<String>,
    },
    InlineScript { script: NodeDataRef<ElementData>, js: String },
    SetImageSrc { img: NodeDataRef<ElementData>, uri: String },
}

/// Bundle with default options
pub fn bundle(
    registry: &FileRegistry,
    entry: &UploadedFile,
    overlay: &OverlayData,
) -> SplashResult<Bundle> {
    bundle_with(registry, entry, overlay, &BundleOptions::default())
}

pub fn bundle_with(
    registry: &FileRegistry,
    entry: &UploadedFile,
    overlay: &OverlayData,
    options: &BundleOptions,
) -> SplashResult<Bundle> {
    let source = read_as_text(entry)?;
    let document = kuchikiki::parse_html().one(source);
    let parts = DocumentParts::locate(&document, &entry.name)?;

    let mut report = BundleReport::default();
    let edits = plan_edits(&document, registry, &mut report);
    for edit in edits {
        apply(edit, &parts);
    }

    report.overlay_root_found = inject_overlay(&parts, overlay, options);

    let html = format!("{}\n{}", DOCTYPE, parts.html.as_node().to_string());
    Ok(Bundle { html, report })
}

struct DocumentParts {
    html: NodeDataRef<ElementData>,
    head: NodeDataRef<ElementData>,
    body: NodeDataRef<ElementData>,
}

impl DocumentParts {
    fn locate(document: &NodeRef, file: &str) -> SplashResult<Self> {
        let find = |tag: &str| {
            elements_named(document, tag)
                .into_iter()
                .next()
                .ok_or_else(|| SplashError::Parse {
                    file: file.to_string(),
                    message: format!("document has no <{}> element", tag),
                })
        };
        Ok(Self {
            html: find("html")?,
            head: find("head")?,
            body: find("body")?,
        })
    }
}

fn elements_named(root: &NodeRef, tag: &str) -> Vec<NodeDataRef<ElementData>> {
    root.descendants()
        .elements()
        .filter(|el| &*el.name.local == tag)
        .collect()
}

fn attr(el: &ElementData, name: &str) -> Option<String> {
    el.attributes.borrow().get(name).map(str::to_string)
}

/// `rel` holds a `stylesheet` token and no `alternate` one.
///
/// Alternate stylesheets are off until the user picks them, so inlining one
/// would apply it unconditionally.
fn is_stylesheet_link(el: &ElementData) -> bool {
    let Some(rel) = attr(el, "rel") else {
        return false;
    };
    let has = |wanted: &str| {
        rel.split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case(wanted))
    };
    has("stylesheet") && !has("alternate")
}

fn plan_edits(document: &NodeRef, registry: &FileRegistry, report: &mut BundleReport) -> Vec<Edit> {
    let mut edits = Vec::new();

    for link in elements_named(document, "link") {
        if !is_stylesheet_link(&link) {
            continue;
        }
        let Some(href) = attr(&link, "href") else { continue };
        if let Some(css) = plan_inline(RefKind::Stylesheet, &href, registry, report, read_as_text) {
            edits.push(Edit::ReplaceWithStyle {
                link: link.as_node().clone(),
                css,
                media: attr(&link, "media"),
            });
        }
    }

    for script in elements_named(document, "script") {
        let Some(src) = attr(&script, "src") else { continue };
        if let Some(js) = plan_inline(RefKind::Script, &src, registry, report, read_as_text) {
            edits.push(Edit::InlineScript { script, js });
        }
    }

    for img in elements_named(document, "img") {
        let Some(src) = attr(&img, "src") else { continue };
        if let Some(uri) = plan_inline(RefKind::Image, &src, registry, report, read_as_data_uri) {
            edits.push(Edit::SetImageSrc { img, uri });
        }
    }

    edits
}

fn plan_inline(
    kind: RefKind,
    reference: &str,
    registry: &FileRegistry,
    report: &mut BundleReport,
    read: fn(&UploadedFile) -> Result<String, ReadError>,
) -> Option<String> {
    if !is_inlinable_ref(reference) {
        return None;
    }

    let (outcome, content) = match resolve(reference.trim(), registry) {
        None => (RefOutcome::Unresolved, None),
        Some(file) => match read(file) {
            Ok(content) => (
                RefOutcome::Inlined {
                    file: file.name.clone(),
                },
                Some(content),
            ),
            Err(e) => (
                RefOutcome::Unreadable {
                    error: e.to_string(),
                },
                None,
            ),
        },
    };

    report.references.push(ReferenceRecord {
        kind,
        reference: reference.to_string(),
        outcome,
    });
    content
}

fn apply(edit: Edit, parts: &DocumentParts) {
    match edit {
        Edit::ReplaceWithStyle { link, css, media } => {
            let style = create_element(&parts.head, "style");
            if let (Some(media), Some(el)) = (media, style.as_element()) {
                el.attributes.borrow_mut().insert("media", media);
            }
            style.append(NodeRef::new_text(css));
            link.insert_before(style);
            link.detach();
        }
        Edit::InlineScript { script, js } => {
            script.attributes.borrow_mut().remove("src");
            let node = script.as_node();
            for child in node.children().collect::<Vec<_>>() {
                child.detach();
            }
            node.append(NodeRef::new_text(js));
        }
        Edit::SetImageSrc { img, uri } => {
            img.attributes.borrow_mut().insert("src", uri);
        }
    }
}

/// Inject overlay styles, markup and wrapper script.
///
/// Returns whether the markup carries the overlay root id.
fn inject_overlay(parts: &DocumentParts, overlay: &OverlayData, options: &BundleOptions) -> bool {
    let style = create_element(&parts.head, "style");
    style.append(NodeRef::new_text(overlay.css.clone()));
    parts.head.as_node().append(style);

    let markup = parse_markup(&overlay.html);
    let root_found = markup.iter().any(|node| {
        node.inclusive_descendants()
            .elements()
            .any(|el| el.attributes.borrow().get("id") == Some(OVERLAY_ROOT_ID))
    });

    let body = parts.body.as_node();
    let anchor = body.first_child();
    for node in markup {
        node.detach();
        match &anchor {
            Some(first) => first.insert_before(node),
            None => body.append(node),
        }
    }

    let script = create_element(&parts.body, "script");
    script.append(NodeRef::new_text(wrapper_script(
        &overlay.js,
        options.min_display_ms,
    )));
    body.append(script);

    root_found
}

/// Parse overlay markup in body context and return its top-level nodes in order
fn parse_markup(markup: &str) -> Vec<NodeRef> {
    let fragment = kuchikiki::parse_html().one(format!("<body>{}</body>", markup.trim()));
    elements_named(&fragment, "body")
        .into_iter()
        .next()
        .map(|body| body.as_node().children().collect())
        .unwrap_or_default()
}

/// New HTML element named `local`, namespaced like `sibling`
fn create_element(sibling: &ElementData, local: &str) -> NodeRef {
    let mut name = sibling.name.clone();
    name.prefix = None;
    name.local = local.into();
    NodeRef::new_element(name, std::iter::empty::<(ExpandedName, Attribute)>())
}
