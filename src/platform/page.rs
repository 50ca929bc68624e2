//! Page wiring: connects the `ui` state machines to DOM events
//!
//! All interaction state lives in one `Page` shared by the handlers. Handlers
//! update the state first and then mirror the resulting view onto the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
    ScrollLogicalPosition, ScrollToOptions,
};

use super::canvas::CanvasSurface;
use super::dom::{self, listen, set_class, set_style, set_timeout};
use super::storage::LocalStore;
use crate::consts::SERVER_ADDRESS;
use crate::persistence::{clear_menu_flag, mark_menu_open, take_menu_flag};
use crate::render_loop::RenderLoop;
use crate::settings::Settings;
use crate::ui::accordion::{RIPPLE_MS, SCROLL_DELAY_MS, reveal_delays};
use crate::ui::copy_feedback::{self, FLIP_TRANSITION, PULSE_MS};
use crate::ui::menu::{CLOSE_ANIMATION_MS, LINK_CLOSE_DELAY_MS, is_navigation_href};
use crate::ui::modal::{ARTICLE_CLOSE_MS, card_article, parse_article_index, parse_articles};
use crate::ui::nav::{NEWS_SECTION, OBSERVER_THRESHOLDS, SubsectionAction};
use crate::ui::{
    Accordion, ArticleModal, CloseTrigger, DiscordModal, MobileMenu, NavAction, NavClick,
    NavSection, NavbarEffects, Ripple, ScrollReveal, SectionTracker, default_navigation,
};
use crate::ui::reveal::{
    self, ENTER_TRANSITION, HIDDEN_TRANSFORM, HeroEntrance, REVEAL_THRESHOLD, SHOWN_TRANSFORM,
};

/// Timers fire at or after their delay; the slack keeps `tick` past the edge
const TIMER_SLACK_MS: f64 = 5.0;
/// Navbar offset kept clear when jumping to an anchor
const ANCHOR_OFFSET_PX: f64 = 80.0;
const EASING: &str = "cubic-bezier(0.42, 0, 0.58, 1)";

// Clipboard writes go through the promise-based API directly
#[wasm_bindgen(inline_js = "
    export function write_clipboard(text) {
        return navigator.clipboard.writeText(text);
    }
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn write_clipboard(text: &str) -> Result<js_sys::Promise, JsValue>;
}

/// Interaction state for the whole page
pub struct Page {
    document: Document,
    navigation: Vec<NavSection>,
    tracker: SectionTracker,
    menu: MobileMenu,
    accordion: Accordion,
    articles: ArticleModal,
    discord: DiscordModal,
    navbar: NavbarEffects,
    reveal: ScrollReveal,
    store: LocalStore,
}

pub type SharedPage = Rc<RefCell<Page>>;
pub type SharedBackground = Rc<RefCell<RenderLoop<CanvasSurface>>>;

/// Start the particle background and keep it sized to the window
pub fn start_background(settings: &Settings, seed: u64) -> Result<SharedBackground, JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;

    let mut surface = CanvasSurface::create(&document)?;
    crate::viewport::ViewportSync::apply(&mut surface, dom::viewport(&window));

    let mut rng = Pcg32::seed_from_u64(seed);
    let render = Rc::new(RefCell::new(RenderLoop::from_settings(
        surface, settings, &mut rng,
    )));
    log::info!(
        "Particle background: {} particles, seed {}",
        render.borrow().field().len(),
        seed
    );

    {
        let render = render.clone();
        let window_clone = window.clone();
        listen(&window, "resize", move |_| {
            render.borrow_mut().resize(dom::viewport(&window_clone));
        })?;
    }

    super::controls::register(render.clone());
    dom::request_animation_frame(render.clone());
    Ok(render)
}

/// Build page state and attach every interaction handler
pub fn start_page() -> Result<SharedPage, JsValue> {
    let document = dom::document()?;
    let navigation = default_navigation();
    let articles = load_articles(&document);

    let accordion_len = dom::query_all(&document, ".accordion-item").len();
    let page = Rc::new(RefCell::new(Page {
        tracker: SectionTracker::from_navigation(&navigation),
        navigation,
        menu: MobileMenu::new(),
        accordion: Accordion::new(accordion_len),
        articles: ArticleModal::new(articles),
        discord: DiscordModal::new(),
        navbar: NavbarEffects::new(),
        reveal: ScrollReveal::new(),
        store: LocalStore,
        document,
    }));

    build_navigation(&page.borrow());
    wire_section_nav(&page)?;
    wire_section_observer(&page)?;
    play_page_enter(&page.borrow().document);
    wire_scroll_reveal(&page)?;
    wire_mobile_menu(&page)?;
    wire_accordion(&page)?;
    wire_modals(&page)?;
    wire_copy_ip(&page)?;
    wire_navbar(&page)?;
    wire_anchor_links(&page)?;
    restore_menu(&page);

    Ok(page)
}

/// Articles come from `<script type="application/json" id="articles-data">`
fn load_articles(document: &Document) -> Vec<crate::ui::Article> {
    let Some(json) = document
        .get_element_by_id("articles-data")
        .and_then(|el| el.text_content())
    else {
        log::debug!("No article data on this page");
        return Vec::new();
    };
    match parse_articles(&json) {
        Ok(articles) => {
            log::info!("Loaded {} articles", articles.len());
            articles
        }
        Err(e) => {
            log::warn!("Ignoring malformed article data: {}", e);
            Vec::new()
        }
    }
}

// === Section navigation ===

fn build_navigation(page: &Page) {
    let document = &page.document;
    let Some(container) = document.get_element_by_id("sectionNav") else {
        log::debug!("No #sectionNav, navigation disabled");
        return;
    };
    container.set_inner_html("");

    for section in &page.navigation {
        let result = if section.subsections.is_empty() {
            nav_item(document, section)
        } else {
            nav_group(document, section)
        }
        .and_then(|entry| container.append_child(&entry).map(|_| ()));
        if let Err(e) = result {
            log::warn!("Failed to build nav entry {}: {:?}", section.id, e);
        }
    }
}

fn div(document: &Document, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    Ok(el)
}

fn label(document: &Document, text: &str) -> Result<Element, JsValue> {
    let el = document.create_element("span")?;
    el.set_class_name("section-nav-label");
    el.set_text_content(Some(text));
    Ok(el)
}

fn nav_item(document: &Document, section: &NavSection) -> Result<Element, JsValue> {
    let item = div(document, "section-nav-item")?;
    item.set_attribute("data-section", &section.id)?;

    let indicator = div(document, "section-nav-indicator")?;
    indicator.append_child(&div(document, "section-nav-line")?)?;
    indicator.append_child(&div(document, "section-nav-dot")?)?;

    item.append_child(&label(document, &section.label)?)?;
    item.append_child(&indicator)?;
    Ok(item)
}

fn nav_group(document: &Document, section: &NavSection) -> Result<Element, JsValue> {
    let group = div(document, "section-nav-group")?;
    group.append_child(&nav_item(document, section)?)?;
    group.append_child(&div(document, "section-nav-hover-bridge")?)?;

    let subsections = div(document, "section-nav-subsections")?;
    subsections.append_child(&div(document, "section-nav-vertical-connector")?)?;
    for sub in &section.subsections {
        let item = div(document, "section-nav-subsection")?;
        match sub.action {
            SubsectionAction::Scroll => item.set_attribute("data-scroll-to", &sub.id)?,
            SubsectionAction::Article(index) => {
                item.set_attribute("data-article", &index.to_string())?
            }
        }
        item.append_child(&label(document, &sub.label)?)?;
        item.append_child(&div(document, "section-nav-horizontal-line")?)?;
        item.append_child(&div(document, "section-nav-dot")?)?;
        subsections.append_child(&item)?;
    }
    group.append_child(&subsections)?;
    Ok(group)
}

fn show_active_section(document: &Document, id: &str) {
    for item in dom::query_all(document, ".section-nav-item") {
        let is_active = item.get_attribute("data-section").as_deref() == Some(id);
        set_class(&item, "active", is_active);
    }
}

fn section_element(page: &Page, id: &str) -> Option<Element> {
    let section = page.navigation.iter().find(|s| s.id == id)?;
    page.document.query_selector(&section.selector).ok().flatten()
}

fn wire_section_nav(page: &SharedPage) -> Result<(), JsValue> {
    let Some(nav) = page.borrow().document.get_element_by_id("sectionNav") else {
        return Ok(());
    };

    let page = page.clone();
    listen(&nav, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        let sub = target.closest(".section-nav-subsection").ok().flatten();
        let item = target.closest(".section-nav-item").ok().flatten();
        let (scroll_to, article, section) = match (&sub, &item) {
            (Some(sub), _) => (
                sub.get_attribute("data-scroll-to"),
                sub.get_attribute("data-article"),
                None,
            ),
            (None, Some(item)) => (None, None, item.get_attribute("data-section")),
            (None, None) => return,
        };
        let click = match &section {
            Some(id) => NavClick::Section(id),
            None if sub.is_some() => NavClick::Subsection {
                scroll_to: scroll_to.as_deref(),
                article: article.as_deref(),
            },
            None => return,
        };

        let actions = page.borrow_mut().tracker.handle_click(click);
        for action in actions {
            match action {
                NavAction::ScrollToElement(id) => {
                    if let Some(el) = page.borrow().document.get_element_by_id(&id) {
                        dom::scroll_into_view(&el, ScrollLogicalPosition::Center);
                    }
                }
                NavAction::OpenArticle(index) => open_article(&page, index),
                NavAction::ScrollToSection(id) => {
                    let p = page.borrow();
                    if let Some(el) = section_element(&p, &id) {
                        dom::scroll_into_view(&el, ScrollLogicalPosition::Start);
                    }
                    show_active_section(&p.document, &id);
                }
            }
        }
    })
}

fn wire_section_observer(page: &SharedPage) -> Result<(), JsValue> {
    let Some(root) = page.borrow().document.get_element_by_id("content-wrapper") else {
        log::debug!("No #content-wrapper, section tracking disabled");
        return Ok(());
    };

    let callback = {
        let page = page.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let mut p = page.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Some(id) = entry.target().get_attribute("data-section-id") {
                        p.tracker
                            .observe(&id, entry.is_intersecting(), entry.intersection_ratio());
                    }
                }
                if let Some(active) = p.tracker.resolve().map(str::to_string) {
                    log::debug!("Active section: {}", active);
                    show_active_section(&p.document, &active);
                }
            },
        )
    };

    let thresholds: js_sys::Array = OBSERVER_THRESHOLDS
        .iter()
        .map(|t| JsValue::from_f64(*t))
        .collect();
    let init = IntersectionObserverInit::new();
    init.set_root(Some(&root));
    init.set_threshold(&thresholds);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    let p = page.borrow();
    for section in &p.navigation {
        if let Some(el) = p.document.query_selector(&section.selector).ok().flatten() {
            el.set_attribute("data-section-id", &section.id)?;
            observer.observe(&el);
        }
    }
    Ok(())
}

// === Page enter and scroll reveal ===

/// Stagger the first paint. The landing page animates its hero and news
/// cards; other pages fade in their `.page-enter` elements in order.
fn play_page_enter(document: &Document) {
    let hero_children = dom::query_all(document, ".hero > *");
    if hero_children.is_empty() {
        let elements = dom::query_all(document, ".page-enter");
        let delays = reveal::enter_delays(elements.len());
        for (el, delay) in elements.into_iter().zip(delays) {
            set_style(&el, "opacity", "0");
            set_style(&el, "transform", HIDDEN_TRANSFORM);
            set_timeout(delay, move || show_revealed(&el));
        }
        return;
    }

    for (i, el) in hero_children.into_iter().enumerate() {
        let animation = dom::computed_style(&el, "animation-name");
        let has_animation = !animation.is_empty() && animation != "none";
        let entrance = HeroEntrance::for_child(i, has_animation);
        match entrance {
            HeroEntrance::Keyframes { delay_ms } => {
                set_class(&el, "page-enter", true);
                set_style(&el, "animation-delay", &reveal::css_seconds(delay_ms));
            }
            HeroEntrance::FadeOnly { cleanup_ms, .. } => {
                set_style(&el, "opacity", "0");
                if let Some(transition) = entrance.fade_transition() {
                    set_style(&el, "transition", &transition);
                }
                let fading = el.clone();
                dom::next_frame(move || set_style(&fading, "opacity", "1"));
                set_timeout(cleanup_ms, move || set_style(&el, "transition", ""));
            }
        }
    }

    for (i, card) in dom::query_all(document, ".news-grid > .news-card")
        .into_iter()
        .enumerate()
    {
        set_class(&card, "page-enter-card", true);
        let delay = reveal::css_seconds(reveal::news_card_delay_ms(i));
        set_style(&card, "animation-delay", &delay);
    }
}

fn show_revealed(el: &Element) {
    set_style(el, "transition", ENTER_TRANSITION);
    set_style(el, "opacity", "1");
    set_style(el, "transform", SHOWN_TRANSFORM);
}

/// Reveal `.page-enter` elements the first time they scroll into view
fn wire_scroll_reveal(page: &SharedPage) -> Result<(), JsValue> {
    let document = page.borrow().document.clone();
    let elements = dom::query_all(&document, ".page-enter");
    if elements.is_empty() {
        return Ok(());
    }

    let callback = {
        let page = page.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(id) = target
                        .get_attribute("data-reveal-id")
                        .as_deref()
                        .and_then(|id| id.parse().ok())
                    else {
                        continue;
                    };
                    let first = page
                        .borrow_mut()
                        .reveal
                        .on_intersect(id, entry.is_intersecting());
                    if first {
                        observer.unobserve(&target);
                        dom::next_frame(move || show_revealed(&target));
                    } else if page.borrow().reveal.is_revealed(id) {
                        observer.unobserve(&target);
                    }
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    if let Some(root) = document.get_element_by_id("content-wrapper") {
        init.set_root(Some(&root));
    }
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for (id, el) in elements.iter().enumerate() {
        let opacity = dom::computed_style(el, "opacity");
        let transform = dom::computed_style(el, "transform");
        if reveal::already_visible(&opacity, &transform) {
            continue;
        }
        if inline_style(el, "opacity").is_empty() {
            set_style(el, "opacity", "0");
        }
        if inline_style(el, "transform").is_empty() {
            set_style(el, "transform", HIDDEN_TRANSFORM);
        }
        el.set_attribute("data-reveal-id", &id.to_string())?;
        observer.observe(el);
    }
    log::debug!("Scroll reveal watching {} elements", elements.len());
    Ok(())
}

fn inline_style(el: &Element, property: &str) -> String {
    el.dyn_ref::<HtmlElement>()
        .and_then(|el| el.style().get_property_value(property).ok())
        .unwrap_or_default()
}

// === Mobile menu ===

fn apply_menu(page: &Page, replay_animations: bool) {
    let document = &page.document;
    let view = page.menu.view();

    if let Some(hamburger) = document.get_element_by_id("hamburger") {
        set_class(&hamburger, "active", view.expanded);
        let expanded = if view.expanded { "true" } else { "false" };
        let _ = hamburger.set_attribute("aria-expanded", expanded);
    }
    if let Some(menu) = document.get_element_by_id("mobileMenu") {
        set_class(&menu, "active", view.panel_active);
        set_class(&menu, "closing", view.panel_closing);
    }
    if let Some(overlay) = document.get_element_by_id("mobileMenuOverlay") {
        set_class(&overlay, "active", view.overlay_active);
    }
    dom::lock_body_scroll(document, view.scroll_locked);

    if replay_animations {
        for link in dom::query_all(document, ".mobile-menu-link") {
            if let Some(link) = link.dyn_ref::<HtmlElement>() {
                let _ = link.style().set_property("animation", "none");
                // Reading layout forces a reflow so the animation restarts
                let _ = link.offset_height();
                let _ = link.style().set_property("animation", "");
            }
        }
    }
}

/// Let the menu's closing animation finish later
fn schedule_menu_tick(page: &SharedPage, delay_ms: f64) {
    let page = page.clone();
    set_timeout(delay_ms + TIMER_SLACK_MS, move || {
        let mut p = page.borrow_mut();
        let was_open = p.menu.is_open();
        if p.menu.tick(dom::now()) {
            apply_menu(&p, false);
            if was_open {
                // Delayed close from a link click starts its own animation
                drop(p);
                schedule_menu_tick(&page, CLOSE_ANIMATION_MS);
            }
        }
    });
}

/// Close from a user gesture: drop the persisted flag as well
fn close_menu_explicitly(page: &SharedPage) {
    let mut p = page.borrow_mut();
    clear_menu_flag(&mut p.store);
    if p.menu.close(dom::now()) {
        apply_menu(&p, false);
        drop(p);
        schedule_menu_tick(page, CLOSE_ANIMATION_MS);
    }
}

fn wire_mobile_menu(page: &SharedPage) -> Result<(), JsValue> {
    let document = page.borrow().document.clone();
    let Some(hamburger) = document.get_element_by_id("hamburger") else {
        return Ok(());
    };
    if document.get_element_by_id("mobileMenu").is_none() {
        return Ok(());
    }

    {
        let page = page.clone();
        listen(&hamburger, "click", move |_| {
            if page.borrow().menu.is_open() {
                close_menu_explicitly(&page);
            } else {
                let mut p = page.borrow_mut();
                let replay = p.menu.open(false);
                apply_menu(&p, replay);
            }
        })?;
    }

    if let Some(overlay) = document.get_element_by_id("mobileMenuOverlay") {
        let page = page.clone();
        listen(&overlay, "click", move |_| close_menu_explicitly(&page))?;
    }

    for link in dom::query_all(&document, ".mobile-menu-link") {
        let is_server_ip = link.class_list().contains("mobile-server-ip");
        let page = page.clone();
        listen(&link, "click", move |_| {
            page.borrow_mut().menu.link_clicked(dom::now(), is_server_ip);
            if !is_server_ip {
                schedule_menu_tick(&page, LINK_CLOSE_DELAY_MS);
            }
        })?;
    }

    // Links that leave the page keep the menu open across the navigation
    for link in dom::query_all(
        &document,
        ".mobile-menu a, .mobile-menu-link a, .mobile-menu-link[href]",
    ) {
        let page = page.clone();
        let link_clone = link.clone();
        listen(&link, "click", move |_| {
            let href = link_clone.get_attribute("href");
            if is_navigation_href(href.as_deref()) {
                mark_menu_open(&mut page.borrow_mut().store, dom::now());
            }
        })?;
    }

    {
        let page = page.clone();
        let window = dom::window()?;
        let window_clone = window.clone();
        listen(&window, "resize", move |_| {
            let width = dom::viewport(&window_clone).width as f64;
            let mut p = page.borrow_mut();
            if p.menu.on_resize(width, dom::now()) {
                clear_menu_flag(&mut p.store);
                apply_menu(&p, false);
                drop(p);
                schedule_menu_tick(&page, CLOSE_ANIMATION_MS);
            }
        })?;
    }

    Ok(())
}

fn restore_menu(page: &SharedPage) {
    let mut p = page.borrow_mut();
    if take_menu_flag(&mut p.store, dom::now()) {
        log::info!("Restoring open mobile menu");
        let replay = p.menu.open(true);
        apply_menu(&p, replay);
    }
}

// === Accordion ===

fn wire_accordion(page: &SharedPage) -> Result<(), JsValue> {
    let document = page.borrow().document.clone();
    let items = dom::query_all(&document, ".accordion-item");

    for (index, item) in items.iter().enumerate() {
        let Some(header) = item.query_selector(".accordion-header")? else {
            continue;
        };
        set_style(&header, "position", "relative");
        set_style(&header, "overflow", "hidden");

        {
            let page = page.clone();
            let items = items.clone();
            let header_clone = header.clone();
            listen(&header, "click", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    spawn_ripple(&header_clone, event);
                }
                let change = page.borrow_mut().accordion.toggle(index);
                if let Some(closed) = change.closed.and_then(|i| items.get(i)) {
                    set_class(closed, "active", false);
                    set_style(closed, "box-shadow", "");
                    let content = closed.query_selector(".accordion-content").ok().flatten();
                    if let Some(content) = content {
                        set_style(&content, "max-height", "");
                    }
                }
                if let Some(opened) = change.opened.and_then(|i| items.get(i)) {
                    reveal_accordion_item(opened);
                }
            })?;
        }

        {
            let item_clone = item.clone();
            listen(item, "mouseenter", move |_| {
                set_style(
                    &item_clone,
                    "box-shadow",
                    "0 8px 32px rgba(239, 68, 68, 0.3), 0 0 20px rgba(220, 38, 38, 0.2)",
                );
            })?;
        }
        {
            let page = page.clone();
            let item_clone = item.clone();
            listen(item, "mouseleave", move |_| {
                if !page.borrow().accordion.keeps_glow(index) {
                    set_style(&item_clone, "box-shadow", "");
                }
            })?;
        }
    }
    Ok(())
}

fn reveal_accordion_item(item: &Element) {
    set_class(item, "active", true);
    let Some(content) = item.query_selector(".accordion-content").ok().flatten() else {
        return;
    };
    set_style(&content, "max-height", &format!("{}px", content.scroll_height()));

    let children = dom::query_all_in(&content, ".accordion-column, .accordion-meta");
    let delays = reveal_delays(children.len());
    for (child, delay) in children.into_iter().zip(delays) {
        set_style(&child, "opacity", "0");
        set_style(&child, "transform", "translateY(20px)");
        set_timeout(delay, move || {
            set_style(
                &child,
                "transition",
                &format!("opacity 0.4s {EASING}, transform 0.4s {EASING}"),
            );
            set_style(&child, "opacity", "1");
            set_style(&child, "transform", "translateY(0)");
        });
    }

    let item = item.clone();
    set_timeout(SCROLL_DELAY_MS, move || {
        dom::scroll_into_view(&item, ScrollLogicalPosition::Nearest);
    });
}

fn spawn_ripple(header: &Element, event: &MouseEvent) {
    let Some(document) = header.owner_document() else {
        return;
    };
    let rect = header.get_bounding_client_rect();
    let ripple = Ripple::at(
        event.client_x() as f64,
        event.client_y() as f64,
        (rect.left(), rect.top(), rect.width(), rect.height()),
    );

    let Ok(span) = document.create_element("span") else {
        return;
    };
    let css = format!(
        "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
         background: radial-gradient(circle, rgba(239, 68, 68, 0.4) 0%, transparent 70%); \
         border-radius: 50%; transform: scale(0); \
         animation: ripple-animation 0.6s {EASING}; pointer-events: none;",
        size = ripple.size,
        left = ripple.left,
        top = ripple.top,
    );
    let _ = span.set_attribute("style", &css);
    if header.append_child(&span).is_ok() {
        set_timeout(RIPPLE_MS, move || span.remove());
    }
}

// === Modals ===

fn open_article(page: &SharedPage, index: usize) {
    let mut p = page.borrow_mut();
    let Some(article) = p.articles.open(index).cloned() else {
        log::warn!("No article at index {}", index);
        return;
    };
    let document = p.document.clone();

    if let Some(el) = document.get_element_by_id("articleTitle") {
        el.set_text_content(Some(&article.title));
    }
    if let Some(el) = document.get_element_by_id("articleDate") {
        el.set_text_content(Some(&article.date));
    }
    if let Some(img) = document
        .get_element_by_id("articleImage")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        img.set_src(&article.image);
    }
    if let Some(el) = document.get_element_by_id("articleBody") {
        el.set_inner_html(&article.body);
    }

    p.tracker.set_active(NEWS_SECTION);
    show_active_section(&document, NEWS_SECTION);
    apply_article_modal(&p);
}

/// Mirror the article modal state onto its element, the body and the nav
fn apply_article_modal(page: &Page) {
    let view = page.articles.view();
    if let Some(modal) = page.document.get_element_by_id("articleModal") {
        set_class(&modal, "active", view.active);
        set_class(&modal, "closing", view.closing);
    }
    dom::lock_body_scroll(&page.document, view.scroll_locked);
    highlight_subsection(&page.document, view.highlighted);
}

fn highlight_subsection(document: &Document, index: Option<usize>) {
    for (i, item) in dom::query_all(document, ".section-nav-subsection")
        .iter()
        .enumerate()
    {
        set_class(item, "active", Some(i) == index);
    }
}

fn close_article(page: &SharedPage, trigger: CloseTrigger) {
    let mut p = page.borrow_mut();
    if !p.articles.close(trigger, dom::now()) {
        return;
    }
    apply_article_modal(&p);
    drop(p);

    let page = page.clone();
    set_timeout(ARTICLE_CLOSE_MS + TIMER_SLACK_MS, move || {
        let mut p = page.borrow_mut();
        if p.articles.tick(dom::now()) {
            apply_article_modal(&p);
        }
    });
}

fn apply_discord(document: &Document, open: bool) {
    if let Some(modal) = document.get_element_by_id("discordModal") {
        set_class(&modal, "active", open);
    }
    dom::lock_body_scroll(document, open);
}

/// Which part of a modal a click landed on
fn click_trigger(event: &web_sys::Event, modal_id: &str) -> CloseTrigger {
    let Some(el) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return CloseTrigger::Inside;
    };
    let in_close_button = el.closest(".discord-modal-close").ok().flatten().is_some();
    CloseTrigger::from_click(el.id() == modal_id, in_close_button)
}

fn wire_modals(page: &SharedPage) -> Result<(), JsValue> {
    let document = page.borrow().document.clone();

    if let Some(modal) = document.get_element_by_id("articleModal") {
        let page = page.clone();
        listen(&modal, "click", move |event| {
            close_article(&page, click_trigger(&event, "articleModal"));
        })?;
    }

    if let Some(modal) = document.get_element_by_id("discordModal") {
        let page = page.clone();
        listen(&modal, "click", move |event| {
            let mut p = page.borrow_mut();
            if p.discord.close(click_trigger(&event, "discordModal")) {
                apply_discord(&p.document, false);
            }
        })?;
    }

    for (position, card) in dom::query_all(&document, ".news-grid > .news-card")
        .into_iter()
        .enumerate()
    {
        let attr = card.get_attribute("data-open-article");
        let Some(index) = card_article(attr.as_deref(), position) else {
            log::warn!("News card {} has a bad data-open-article", position);
            continue;
        };
        let page = page.clone();
        listen(&card, "click", move |_| open_article(&page, index))?;
    }

    for opener in dom::query_all(&document, "[data-open-article]:not(.news-card)") {
        let Some(index) = opener
            .get_attribute("data-open-article")
            .as_deref()
            .and_then(parse_article_index)
        else {
            continue;
        };
        let page = page.clone();
        listen(&opener, "click", move |_| open_article(&page, index))?;
    }

    for opener in dom::query_all(&document, "[data-open-discord]") {
        let page = page.clone();
        listen(&opener, "click", move |_| {
            let mut p = page.borrow_mut();
            p.discord.open();
            apply_discord(&p.document, true);
        })?;
    }

    let page = page.clone();
    listen(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() != "Escape" {
            return;
        }
        if page.borrow().menu.is_open() {
            close_menu_explicitly(&page);
        }
        close_article(&page, CloseTrigger::Direct);
        let mut p = page.borrow_mut();
        if p.discord.close(CloseTrigger::Direct) {
            apply_discord(&p.document, false);
        }
    })
}

// === Copy server address ===

fn wire_copy_ip(page: &SharedPage) -> Result<(), JsValue> {
    let document = page.borrow().document.clone();
    for button in dom::query_all(&document, ".nav-server-ip, .mobile-server-ip") {
        let document = document.clone();
        listen(&button, "click", move |_| copy_ip(document.clone()))?;
    }
    Ok(())
}

fn copy_ip(document: Document) {
    let promise = match write_clipboard(SERVER_ADDRESS) {
        Ok(promise) => promise,
        Err(e) => {
            log::error!("Failed to copy: {:?}", e);
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::error!("Failed to copy: {:?}", e);
            return;
        }
        for container in dom::query_all(&document, ".nav-server-ip, .mobile-server-ip") {
            if let Some(label) = container.query_selector("span").ok().flatten() {
                animate_copy(container, label);
            }
        }
    });
}

fn animate_copy(container: Element, label: Element) {
    let original = label.text_content().unwrap_or_default();

    set_class(&container, "copying", true);
    set_timeout(PULSE_MS, move || set_class(&container, "copying", false));

    set_style(&label, "transition", FLIP_TRANSITION);
    for (at, phase) in copy_feedback::schedule() {
        let label = label.clone();
        let original = original.clone();
        set_timeout(at, move || {
            label.set_text_content(Some(phase.text(&original)));
            set_style(
                &label,
                "transform",
                &format!("rotateX({}deg)", phase.rotation_deg()),
            );
        });
    }
}

// === Navbar and anchors ===

fn wire_navbar(page: &SharedPage) -> Result<(), JsValue> {
    let document = page.borrow().document.clone();
    let (Some(navbar), Some(wrapper)) = (
        document.query_selector(".navbar").ok().flatten(),
        document.get_element_by_id("content-wrapper"),
    ) else {
        return Ok(());
    };

    set_style(&navbar, "transition", &format!("all 0.3s {EASING}"));

    let page = page.clone();
    let wrapper_clone = wrapper.clone();
    listen(&wrapper, "scroll", move |_| {
        let view = page
            .borrow_mut()
            .navbar
            .on_scroll(wrapper_clone.scroll_top() as f64);
        set_style(&navbar, "backdrop-filter", view.backdrop_filter());
        set_style(&navbar, "box-shadow", view.box_shadow());
        set_style(&navbar, "transform", view.transform());
    })
}

fn wire_anchor_links(page: &SharedPage) -> Result<(), JsValue> {
    let document = page.borrow().document.clone();
    let Some(wrapper) = document.get_element_by_id("content-wrapper") else {
        return Ok(());
    };

    for anchor in dom::query_all(&document, "a[href^=\"#\"]") {
        let document = document.clone();
        let wrapper = wrapper.clone();
        let anchor_clone = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = anchor_clone.get_attribute("href") else {
                return;
            };
            let Some(target) = document
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(target.offset_top() as f64 - ANCHOR_OFFSET_PX);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            wrapper.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}
