use leptos::{component, view, CollectView, IntoView};

use crate::navigation::{nav_links, MenuPanel, NavLink};
use crate::paths;
use crate::theme::Theme;
use crate::users::NavUser;

/// The header of every page
///
/// `user` decides between the identity menu and the sign in actions, `path`
/// drives link highlighting and `panel` whether the mobile menu is expanded.
#[component]
pub fn Navigation(
    user: Option<NavUser>,
    path: String,
    panel: MenuPanel,
    theme: Theme,
) -> impl IntoView {
    let desktop_links = nav_links(&path)
        .into_iter()
        .map(|link| view! { <NavAnchor link=link/> })
        .collect_view();

    let account = match user.clone() {
        Some(user) => view! {
            <a class="button primary create-game" href={paths::GAME_CREATE}>"+ Nova Pelada"</a>
            <span class="notifications" aria-label="Notificações">
                "🔔"
                <span class="notification-dot"></span>
            </span>
            <ThemeToggle theme=theme path=path.clone()/>
            <IdentityMenu user=user/>
        }
        .into_view(),
        None => view! {
            <ThemeToggle theme=theme path=path.clone()/>
            <div class="auth-actions">
                <AuthLinks/>
            </div>
        }
        .into_view(),
    };

    let mobile = if panel.is_open() {
        view! { <MobilePanel user=user path=path.clone()/> }.into_view()
    } else {
        view! {
            <a class="menu-toggle" href={panel.toggle_href(&path)} aria-label="Abrir menu" aria-expanded="false">
                "☰"
            </a>
        }
        .into_view()
    };

    view! {
        <header class="site-header">
            <div class="container header-bar">
                <a href={paths::HOME} class="brand">
                    <span class="brand-mark gradient-green">"⚽"</span>
                    <span class="brand-name">"PeladaFC"</span>
                </a>
                <nav class="desktop-nav">{desktop_links}</nav>
                <div class="header-actions">
                    {account}
                    {mobile}
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavAnchor(link: NavLink) -> impl IntoView {
    let class = if link.active {
        "nav-link active"
    } else {
        "nav-link"
    };

    view! {
        <a href={link.item.href} class=class aria-current={link.active.then_some("page")}>
            <span class="nav-icon">{link.item.icon}</span>
            <span>{link.item.label}</span>
        </a>
    }
}

#[component]
fn ThemeToggle(theme: Theme, path: String) -> impl IntoView {
    view! {
        <form class="theme-toggle" method="post" action={paths::THEME}>
            <input type="hidden" name="redirect" value=path/>
            <button class="button" type="submit">{theme.toggle_label()}</button>
        </form>
    }
}

#[component]
fn AuthLinks() -> impl IntoView {
    view! {
        <a class="button" href={paths::LOGIN}>"Entrar"</a>
        <a class="button primary" href={paths::SIGN_UP}>"Cadastrar"</a>
    }
}

#[component]
fn SignOutForm() -> impl IntoView {
    view! {
        <form class="sign-out" method="post" action={paths::SIGN_OUT}>
            <button class="button" type="submit">"🚪 Sair"</button>
        </form>
    }
}

/// a picture when there is one, the initial otherwise
#[component]
pub fn Avatar(url: Option<String>, initial: String, variant: &'static str) -> impl IntoView {
    let class = format!("avatar {}", variant);

    match url.filter(|url| !url.is_empty()) {
        Some(url) => view! {
            <span class=class>
                <img src=url alt=initial/>
            </span>
        }
        .into_view(),
        None => view! { <span class=class>{initial}</span> }.into_view(),
    }
}

#[component]
fn IdentityMenu(user: NavUser) -> impl IntoView {
    let initial = user.initial();
    let name = user
        .name
        .clone()
        .map(|name| view! { <p class="identity-name">{name}</p> });
    let email = user
        .email
        .clone()
        .map(|email| view! { <p class="identity-email">{email}</p> });

    view! {
        <details class="identity-menu">
            <summary>
                <Avatar url={user.avatar_url.clone()} initial=initial variant="gradient-green"/>
            </summary>
            <div class="menu-content">
                <div class="identity">{name}{email}</div>
                <a href={paths::PROFILE}>"👤 Perfil"</a>
                <a href={paths::SETTINGS}>"⚙ Configurações"</a>
                <SignOutForm/>
            </div>
        </details>
    }
}

/// The expanded mobile menu
///
/// Every link here leads to a url without the menu parameter, so following
/// any of them closes the panel again.
#[component]
fn MobilePanel(user: Option<NavUser>, path: String) -> impl IntoView {
    let links = nav_links(&path)
        .into_iter()
        .map(|link| view! { <NavAnchor link=link/> })
        .collect_view();

    let account = match user {
        Some(_) => view! {
            <a class="button primary" href={paths::GAME_CREATE}>"+ Nova Pelada"</a>
            <div class="mobile-section">
                <a class="button" href={paths::PROFILE}>"👤 Perfil"</a>
                <a class="button" href={paths::SETTINGS}>"⚙ Configurações"</a>
                <SignOutForm/>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="mobile-section">
                <AuthLinks/>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="mobile-panel" id="mobile-menu">
            <a class="menu-dismiss" href=path aria-label="Fechar menu" aria-expanded="true">"✕"</a>
            <nav class="mobile-nav">{links}</nav>
            {account}
        </div>
    }
}
