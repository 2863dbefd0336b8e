use chrono::FixedOffset;
use leptos::{component, view, CollectView, IntoView};

use crate::games::Game;
use crate::home::{HomeModel, RankedPlayer};
use crate::navigation::{MenuPanel, Navigation};
use crate::navigation::view::Avatar;
use crate::paths;
use crate::theme::Theme;
use crate::users::first_letter;

/// per request context the page is rendered with
#[derive(Debug, Clone)]
pub struct PageContext {
    pub path: String,
    pub panel: MenuPanel,
    pub theme: Theme,
    pub offset: FixedOffset,
}

#[component]
pub fn NotConfigured() -> impl IntoView {
    view! {
        <div class="config-message">
            <h1>"Connect Supabase to get started"</h1>
        </div>
    }
}

#[component]
pub fn Home(model: HomeModel, context: PageContext) -> impl IntoView {
    let authenticated = model.viewer.is_authenticated();
    let offset = context.offset;

    let games = model
        .games
        .is_visible()
        .then(|| view! { <UpcomingGames games={model.games.into_items()} offset=offset/> });
    let players = model
        .top_players
        .is_visible()
        .then(|| view! { <TopPlayers players={model.top_players.into_items()}/> });

    view! {
        <div class="page">
            <Navigation
                user={model.viewer.nav_user()}
                path={context.path}
                panel={context.panel}
                theme={context.theme}
            />
            <main class="container">
                <Hero authenticated=authenticated/>
                <Features/>
                {games}
                {players}
                {(!authenticated).then(|| view! { <CallToAction/> })}
            </main>
        </div>
    }
}

#[component]
fn Hero(authenticated: bool) -> impl IntoView {
    let actions = if authenticated {
        view! {
            <a class="button primary" href={paths::GAME_CREATE}>"+ Criar Nova Pelada"</a>
            <a class="button" href={paths::GAMES}>"📅 Ver Peladas"</a>
        }
        .into_view()
    } else {
        view! {
            <a class="button primary" href={paths::SIGN_UP}>"Começar Agora"</a>
            <a class="button" href={paths::GAMES}>"Ver Peladas"</a>
        }
        .into_view()
    };

    view! {
        <section class="hero">
            <h1>"Sua rede social do futebol de várzea"</h1>
            <p>
                "Organize peladas, forme times balanceados, acompanhe suas estatísticas e conecte-se com outros jogadores"
            </p>
            <div class="hero-actions">{actions}</div>
        </section>
    }
}

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "📅",
        "Organize Peladas",
        "Crie peladas com data, local, regras e gerencie participantes facilmente",
    ),
    (
        "👥",
        "Times Balanceados",
        "Algoritmo inteligente que forma times equilibrados baseado nas habilidades",
    ),
    (
        "🏆",
        "Estatísticas",
        "Acompanhe gols, assistências, avaliações e conquiste troféus",
    ),
    (
        "⭐",
        "Sistema de Avaliação",
        "Avalie outros jogadores e construa sua reputação na comunidade",
    ),
    (
        "📈",
        "Feed Social",
        "Compartilhe fotos, vídeos e melhores momentos das suas peladas",
    ),
    (
        "📍",
        "Localização",
        "Encontre peladas próximas a você e descubra novos campos",
    ),
];

#[component]
fn Features() -> impl IntoView {
    let cards = FEATURES
        .iter()
        .map(|(icon, title, description)| {
            view! {
                <div class="card feature">
                    <div class="feature-icon gradient-green">{*icon}</div>
                    <h3>{*title}</h3>
                    <p class="card-description">{*description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="section features">
            <div class="section-intro">
                <h2>"Tudo que você precisa para suas peladas"</h2>
                <p>"Uma plataforma completa para organizar e acompanhar seus jogos de futebol"</p>
            </div>
            <div class="grid">{cards}</div>
        </section>
    }
}

#[component]
fn UpcomingGames(games: Vec<Game>, offset: FixedOffset) -> impl IntoView {
    let cards = games
        .into_iter()
        .map(|game| view! { <GameCard game=game offset=offset/> })
        .collect_view();

    view! {
        <section class="section upcoming-games">
            <div class="section-header">
                <div>
                    <h2>"Próximas Peladas"</h2>
                    <p>"Participe das peladas que estão rolando"</p>
                </div>
                <a class="button" href={paths::GAMES}>"Ver Todas"</a>
            </div>
            <div class="grid">{cards}</div>
        </section>
    }
}

#[component]
fn GameCard(game: Game, offset: FixedOffset) -> impl IntoView {
    let creator_avatar = game.creator.as_ref().and_then(|c| c.avatar_url.clone());
    let creator_name = game.creator_name().map(String::from).unwrap_or_default();

    view! {
        <article class="card game-card">
            <div class="card-top">
                <span class="badge">{game.status_label()}</span>
                <span class="participants">{game.participants_label()}</span>
            </div>
            <h3 class="game-title">{game.title.clone()}</h3>
            <p class="card-description">{game.description.clone().unwrap_or_default()}</p>
            <div class="card-meta">
                <div class="starts-at">"🕒 "{game.starts_at_label(&offset)}</div>
                <div class="location">"📍 "{game.location.clone().unwrap_or_default()}</div>
            </div>
            <div class="card-footer">
                <div class="creator">
                    <Avatar url=creator_avatar initial={game.creator_initial()} variant="small"/>
                    <span class="creator-name">{creator_name}</span>
                </div>
                <a class="button" href={game.detail_href()}>"Ver Detalhes"</a>
            </div>
        </article>
    }
}

#[component]
fn TopPlayers(players: Vec<RankedPlayer>) -> impl IntoView {
    let cards = players
        .into_iter()
        .map(|player| view! { <PlayerCard player=player/> })
        .collect_view();

    view! {
        <section class="section top-players">
            <div class="section-header">
                <div>
                    <h2>"Melhores Jogadores"</h2>
                    <p>"Os craques da comunidade"</p>
                </div>
                <a class="button" href={paths::RANKINGS}>"Ver Ranking"</a>
            </div>
            <div class="grid players">{cards}</div>
        </section>
    }
}

#[component]
fn PlayerCard(player: RankedPlayer) -> impl IntoView {
    let profile = player.profile;
    let initial = profile
        .name
        .as_deref()
        .and_then(first_letter)
        .map(String::from)
        .unwrap_or_default();
    let badge = player
        .badge
        .map(|rank| view! { <span class="rank-badge">{rank.to_string()}</span> });

    view! {
        <article class="card player-card">
            <div class="player-avatar">
                <Avatar url={profile.avatar_url.clone()} initial=initial variant="large gradient-green"/>
                {badge}
            </div>
            <h3 class="player-name">{profile.name.clone().unwrap_or_default()}</h3>
            <div class="rating">"⭐ "<span class="rating-value">{profile.rating_label()}</span></div>
            <p class="card-meta">{profile.stats_label()}</p>
        </article>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="card">
                <h2>"Pronto para começar?"</h2>
                <p>"Junte-se à maior comunidade de futebol de várzea do Brasil"</p>
                <a class="button primary" href={paths::SIGN_UP}>"Criar Conta Grátis"</a>
            </div>
        </section>
    }
}
