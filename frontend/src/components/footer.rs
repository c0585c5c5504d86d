//! Footer component

use leptos::*;

use crate::components::Icon;
use crate::{
    ContactDetail, FooterContent, FooterStyle, IconKind, NavLink, NavSection, BRAND_NAME,
    BRAND_TAGLINE,
};

/// Site footer: brand block, contact lines, social icons, the four
/// navigation columns and the legal bar.
///
/// Mount once at the bottom of every page. Without a `style` the dark
/// brand theme is used.
#[component]
pub fn Footer(#[prop(optional)] style: Option<FooterStyle>) -> impl IntoView {
    let style = style.unwrap_or_default();
    let year = FooterContent::display_year();

    let columns = FooterContent::nav_sections()
        .iter()
        .copied()
        .map(|section| view! { <NavColumn section=section style=style.clone()/> })
        .collect_view();

    view! {
        <footer class="site-footer" style=style.container()>
            <div style=style.inner()>
                <div class="footer-grid" style=style.grid()>
                    <BrandBlock style=style.clone()/>
                    {columns}
                </div>
                <hr style=style.divider()/>
                <LegalBar year=year style=style.clone()/>
            </div>
        </footer>
    }
}

#[component]
fn BrandBlock(style: FooterStyle) -> impl IntoView {
    let contact = FooterContent::contact_details()
        .iter()
        .copied()
        .map(|detail| view! { <ContactLine detail=detail style=style.clone()/> })
        .collect_view();

    view! {
        <div class="footer-brand">
            <h2 style=style.brand()>
                <Icon kind=IconKind::Brand size=28 style=style.icon_accent()/>
                {BRAND_NAME}
            </h2>
            <p style=style.tagline()>{BRAND_TAGLINE}</p>
            <address style="font-style: normal;">{contact}</address>
            <SocialLinks style=style.clone()/>
        </div>
    }
}

#[component]
fn ContactLine(detail: ContactDetail, style: FooterStyle) -> impl IntoView {
    let text = match detail.href {
        Some(href) => view! {
            <a href=href style=style.link()>{detail.text}</a>
        }
        .into_view(),
        None => detail.text.into_view(),
    };

    view! {
        <p class="footer-contact" style=style.contact()>
            <Icon kind=detail.icon size=18 style=style.icon_accent()/>
            {text}
        </p>
    }
}

#[component]
fn SocialLinks(style: FooterStyle) -> impl IntoView {
    let links = FooterContent::social_links()
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.destination
                    aria-label=link.accessible_label
                    title=link.accessible_label
                    target="_blank"
                    rel="noopener noreferrer"
                    style=style.social_button()
                >
                    <Icon kind=link.icon size=18/>
                </a>
            }
        })
        .collect_view();

    view! { <div class="footer-social" style=style.social_row()>{links}</div> }
}

#[component]
fn NavColumn(section: NavSection, style: FooterStyle) -> impl IntoView {
    view! {
        <nav class="footer-column" aria-label=section.title>
            <h3 style=style.heading()>
                <Icon kind=section.icon size=18 style=style.icon_accent()/>
                {section.title}
            </h3>
            <ul style=style.list()>
                {section
                    .links
                    .iter()
                    .copied()
                    .map(|link| view! { <li><FooterLink link=link style=style.clone()/></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn FooterLink(link: NavLink, style: FooterStyle) -> impl IntoView {
    view! {
        <a href=link.destination style=style.link()>{link.label}</a>
    }
}

#[component]
fn LegalBar(year: i32, style: FooterStyle) -> impl IntoView {
    let links = FooterContent::legal_links()
        .iter()
        .copied()
        .map(|link| view! { <FooterLink link=link style=style.clone()/> })
        .collect_view();

    view! {
        <div class="footer-bottom" style=style.bottom_bar()>
            <span class="footer-copyright">{FooterContent::copyright_notice(year)}</span>
            <div class="footer-legal" style=style.legal_links()>{links}</div>
        </div>
    }
}
