use chrono::Datelike;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::notification::{Notice, ToastMsg, ToastQueue, Toaster};
use crate::components::story_form::StoryForm;
use crate::config;

const APP_IMAGE: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/CB568E3E-E08E-49C1-82E4-09AF352DCB31-Hee7t6eSOwL24MvQM3V1oEFKvjYlpp.png";
const LEGACY_IMAGE: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/AAC679B9-A25C-48BF-84E6-B48249B6DD75-Eh4kraTyKZZznKpk7dsTdyaHWZCNNU.png";

const NAV_LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#how-it-works", "How It Works"),
    ("#nyc-first", "NYC First"),
    ("#colon-cancer", "Health Awareness"),
];

const STEPS: [(&str, &str); 3] = [
    ("Submit your story", "Share your memory through text, voice recording, image, or video"),
    ("We animate it", "Our AI transforms your story into a beautiful animated tribute"),
    ("You get a digital keepsake", "Receive your personalized animated NFT to keep and share"),
];

const BENEFITS: [(&str, &str); 3] = [
    ("Preserve memories", "Your stories help document his influence on basketball and culture"),
    ("Raise awareness", "Support colon cancer awareness and early screening"),
    ("Get a keepsake", "Receive a unique animated NFT tribute to keep and share"),
];

const AWARENESS_CARDS: [(&str, &str, &str); 3] = [
    ("⏱", "Early Detection", "Learn about the importance of regular screenings and early detection"),
    ("💬", "Education", "Access resources and information about colon cancer prevention"),
    ("🏀", "Support", "Connect with support groups and resources for those affected by colon cancer"),
];

const QUICK_LINKS: [&str; 5] = ["About Corey", "How It Works", "NYC First Access", "Health Awareness", "Contact Us"];
const RESOURCE_LINKS: [&str; 4] = ["Colon Cancer Awareness", "NFT FAQ", "Privacy Policy", "Terms of Service"];

#[function_component(Landing)]
pub fn landing() -> Html {
    let toasts = use_reducer(ToastQueue::default);

    let on_notify = {
        let toasts = toasts.dispatcher();
        use_callback(move |notice: Notice, _| toasts.dispatch(ToastMsg::Show(notice)), ())
    };
    let on_dismiss = {
        let toasts = toasts.dispatcher();
        use_callback(move |id: u32, _| toasts.dispatch(ToastMsg::Dismiss(id)), ())
    };

    let countdown = match config::launch_target() {
        Some(target) => html! { <Countdown target={target} /> },
        None => html! {},
    };

    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>
            <header class="site-header">
                <div class="brand">
                    <span class="brand-icon">{"🏀"}</span>
                    <h1 class="brand-name">{"Corey Story"}</h1>
                </div>
                <nav class="site-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </nav>
            </header>

            <main>
                <section id="about" class="hero-section">
                    <h1 class="hero-title">{"From Concrete to Global"}</h1>
                    <h2 class="hero-subtitle">
                        {"Launching May 10th – Corey \"Homicide\" Williams' Legacy Lives On"}
                    </h2>
                    {countdown}
                    <p class="hero-copy">
                        {"Submit your Corey Story with text, audio, image, or video. Everyone gets a free animated NFT tribute. NYC gets early access."}
                    </p>
                </section>

                <section id="how-it-works" class="content-section">
                    <h2 class="section-title">{"HOW IT WORKS"}</h2>
                    <div class="steps">
                        { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                            <div class="step">
                                <div class="step-number">{i + 1}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                    <div class="split">
                        <img src={APP_IMAGE} alt="Corey Story App Animated NFT" width="500" height="500" class="rounded-image" />
                        <div>
                            <h3 class="split-title">{"What's the Corey Story App?"}</h3>
                            <p class="muted">
                                {"It's an app that transforms your memory of Corey 'Homicide' Williams into an animated NFT. Your stories help build a living digital archive and contribute to a community-built Book of Corey."}
                            </p>
                            <div class="benefits">
                                { for BENEFITS.iter().map(|(title, body)| html! {
                                    <div class="benefit">
                                        <span class="benefit-check">{"✓"}</span>
                                        <div>
                                            <h4>{*title}</h4>
                                            <p class="muted">{*body}</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section id="submit-story" class="content-section narrow">
                    <div class="section-intro">
                        <h2 class="section-title">{"SUBMIT. REMEMBER. INSPIRE."}</h2>
                        <p class="muted">{"Share your Corey Story and be part of his lasting legacy"}</p>
                    </div>
                    <div class="card">
                        <StoryForm on_notify={on_notify} />
                    </div>
                </section>

                <section id="nyc-first" class="nyc-section">
                    <h2 class="nyc-title">{"NYC GOES FIRST"}</h2>
                    <p class="nyc-copy">{"NYC GETS EARLY ACCESS. BE PART OF THE FIRST WAVE THAT BUILDS THIS LEGACY."}</p>
                    <div class="ball-badge"><div class="ball-badge-inner">{"🏀"}</div></div>
                    <button class="primary-button large">{"Join NYC Early Access"}</button>
                </section>

                <section id="legacy" class="content-section">
                    <div class="split">
                        <img src={LEGACY_IMAGE} alt="Corey Williams teaching life" width="600" height="600" class="rounded-image" />
                        <div>
                            <h2 class="split-title">{"Some taught the game... He taught life."}</h2>
                            <p class="muted">
                                {"Corey \"Homicide\" Williams wasn't just a basketball legend. He was a mentor, a friend, and an inspiration to countless people around the world."}
                            </p>
                            <p class="muted">
                                {"Through the Corey Story App, we're preserving his legacy and the impact he had on basketball culture, especially in New York City where his journey began."}
                            </p>
                            <p class="muted">
                                {"Your stories, memories, and tributes will help build a living digital archive that celebrates his life and continues his mission of inspiring others."}
                            </p>
                            <button class="outline-button">{"Learn More About Corey"}</button>
                        </div>
                    </div>
                </section>

                <section id="colon-cancer" class="awareness-section">
                    <h2 class="split-title">{"Raising Awareness for Colon Cancer"}</h2>
                    <p class="muted">
                        {"Part of Corey's legacy is raising awareness about colon cancer and the importance of early screening. The Corey Story App includes resources and information to help educate our community."}
                    </p>
                    <div class="awareness-cards">
                        { for AWARENESS_CARDS.iter().map(|(icon, title, body)| html! {
                            <div class="card awareness-card">
                                <div class="awareness-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="muted small">{*body}</p>
                            </div>
                        }) }
                    </div>
                    <button class="primary-button">{"Learn More About Prevention"}</button>
                </section>
            </main>

            <Footer />
            <Toaster toasts={toasts.visible().to_vec()} on_dismiss={on_dismiss} />
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        <span class="brand-icon">{"🏀"}</span>
                        <h3 class="brand-name">{"Corey Story"}</h3>
                    </div>
                    <p class="muted small">
                        {"Preserving the legacy of Corey \"Homicide\" Williams through community stories and digital tributes."}
                    </p>
                    <div class="social-links">
                        <a href="#" class="footer-link">{"Instagram"}</a>
                        <a href="#" class="footer-link">{"Twitter"}</a>
                        <a href="#" class="footer-link">{"YouTube"}</a>
                    </div>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-list">
                        { for QUICK_LINKS.iter().map(|label| html! {
                            <li><a href="#" class="footer-link">{*label}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Resources"}</h4>
                    <ul class="footer-list">
                        { for RESOURCE_LINKS.iter().map(|label| html! {
                            <li><a href="#" class="footer-link">{*label}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Subscribe"}</h4>
                    <p class="muted small">{"Get updates on the Corey Story App launch and early access opportunities."}</p>
                    <div class="subscribe">
                        <input type="email" placeholder="Your email" class="subscribe-input" />
                        <button class="primary-button small">{"Subscribe"}</button>
                    </div>
                </div>
            </div>
            <hr class="footer-separator" />
            <div class="footer-bottom">
                <p class="muted tiny">{format!("© {} Corey Story App. All rights reserved.", year)}</p>
                <div class="footer-legal">
                    <a href="#" class="footer-link tiny">{"Privacy"}</a>
                    <a href="#" class="footer-link tiny">{"Terms"}</a>
                    <a href="#" class="footer-link tiny">{"Cookies"}</a>
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    .landing {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        background: #0a3b2c;
        color: #e8d8b7;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing main { flex: 1; }
    .muted { color: rgba(232, 216, 183, 0.8); margin-bottom: 24px; }
    .small { font-size: 14px; }
    .tiny { font-size: 12px; }
    .site-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 24px 32px;
        border-bottom: 1px solid rgba(232, 216, 183, 0.2);
    }
    .brand { display: flex; align-items: center; gap: 8px; }
    .brand-icon { font-size: 28px; }
    .brand-name { font-size: 24px; font-weight: 700; margin: 0; }
    .site-nav { display: flex; gap: 24px; }
    .nav-link, .footer-link {
        color: rgba(232, 216, 183, 0.7);
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-link:hover, .footer-link:hover { color: #e8d8b7; }
    .hero-section {
        max-width: 1280px;
        margin: 0 auto;
        padding: 96px 32px 48px;
        text-align: center;
    }
    .hero-title { font-size: 60px; font-weight: 700; margin-bottom: 16px; }
    .hero-subtitle { font-size: 30px; font-weight: 400; opacity: 0.9; margin-bottom: 32px; }
    .hero-copy { max-width: 672px; margin: 0 auto 48px; font-size: 18px; opacity: 0.8; }
    .countdown {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 24px;
        max-width: 672px;
        margin: 0 auto 48px;
        padding: 24px;
        border-radius: 12px;
        border: 1px solid rgba(232, 216, 183, 0.2);
        background: rgba(10, 59, 44, 0.5);
    }
    .countdown-unit { display: flex; flex-direction: column; align-items: center; }
    .countdown-value { font-family: monospace; font-size: 48px; font-weight: 700; }
    .countdown-label { opacity: 0.7; }
    .content-section { max-width: 1280px; margin: 0 auto; padding: 64px 32px; }
    .content-section.narrow { max-width: 896px; }
    .section-intro { text-align: center; margin-bottom: 48px; }
    .section-title { font-size: 36px; font-weight: 700; text-align: center; margin-bottom: 16px; }
    .steps { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; margin: 48px 0 64px; }
    .step { display: flex; flex-direction: column; align-items: center; text-align: center; }
    .step p { opacity: 0.7; }
    .step-number {
        width: 64px;
        height: 64px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 24px;
        font-weight: 700;
        background: rgba(232, 216, 183, 0.1);
        border: 1px solid rgba(232, 216, 183, 0.3);
        margin-bottom: 16px;
    }
    .split { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
    .split-title { font-size: 30px; font-weight: 700; margin-bottom: 24px; }
    .rounded-image { border-radius: 8px; max-width: 100%; height: auto; margin: 0 auto; }
    .benefits { display: flex; flex-direction: column; gap: 16px; }
    .benefit { display: flex; align-items: flex-start; gap: 12px; }
    .benefit h4 { margin: 0 0 4px; }
    .benefit-check { font-size: 20px; }
    .card {
        background: #0a3b2c;
        border: 1px solid rgba(232, 216, 183, 0.3);
        border-radius: 12px;
        padding: 24px;
    }
    .story-tabs {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        margin-bottom: 24px;
        border: 1px solid rgba(232, 216, 183, 0.2);
        border-radius: 8px;
        overflow: hidden;
    }
    .story-tab {
        background: transparent;
        border: none;
        color: rgba(232, 216, 183, 0.7);
        padding: 10px;
        cursor: pointer;
    }
    .story-tab.active { background: rgba(232, 216, 183, 0.1); color: #e8d8b7; }
    .story-tab-icon { margin-right: 8px; }
    .story-field { margin-bottom: 24px; }
    .story-label { display: block; font-weight: 500; margin-bottom: 8px; }
    .story-textarea {
        width: 100%;
        min-height: 150px;
        box-sizing: border-box;
        padding: 12px;
        border-radius: 6px;
        background: #0a3b2c;
        color: #e8d8b7;
        border: 1px solid rgba(232, 216, 183, 0.3);
    }
    .drop-zone {
        border: 2px dashed rgba(232, 216, 183, 0.3);
        border-radius: 8px;
        padding: 32px;
        text-align: center;
    }
    .drop-zone-icon { font-size: 48px; opacity: 0.5; margin-bottom: 8px; }
    .drop-zone-hint { opacity: 0.7; margin-bottom: 16px; }
    .selected-file { display: flex; justify-content: center; align-items: center; gap: 8px; margin-bottom: 16px; }
    .hidden-input { display: none; }
    .upload-status { margin-bottom: 24px; }
    .upload-status-row {
        display: flex;
        justify-content: space-between;
        font-size: 14px;
        opacity: 0.7;
        margin-bottom: 8px;
    }
    .progress-track {
        height: 8px;
        border-radius: 4px;
        background: rgba(232, 216, 183, 0.2);
        overflow: hidden;
    }
    .progress-indicator { height: 100%; background: #e8d8b7; transition: width 0.15s linear; }
    .story-form-actions { display: flex; justify-content: flex-end; }
    .primary-button {
        background: #e8d8b7;
        color: #0a3b2c;
        border: none;
        border-radius: 6px;
        padding: 10px 20px;
        font-weight: 600;
        cursor: pointer;
    }
    .primary-button:disabled { opacity: 0.6; cursor: not-allowed; }
    .primary-button.large { font-size: 18px; padding: 24px 32px; }
    .primary-button.small { padding: 6px 12px; }
    .outline-button {
        background: transparent;
        color: #e8d8b7;
        border: 1px solid rgba(232, 216, 183, 0.5);
        border-radius: 6px;
        padding: 10px 20px;
        cursor: pointer;
    }
    .outline-button:hover { background: rgba(232, 216, 183, 0.1); }
    .nyc-section { padding: 64px 32px; text-align: center; background: rgba(0, 0, 0, 0.4); }
    .nyc-title { font-size: 60px; font-weight: 700; margin-bottom: 16px; }
    .nyc-copy { font-size: 24px; opacity: 0.9; max-width: 672px; margin: 0 auto 32px; }
    .ball-badge {
        width: 192px;
        height: 192px;
        margin: 0 auto 32px;
        border-radius: 50%;
        background: #e8d8b7;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .ball-badge-inner {
        width: 160px;
        height: 160px;
        border-radius: 50%;
        background: #0a3b2c;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 96px;
    }
    .awareness-section {
        max-width: 896px;
        margin: 0 auto;
        padding: 64px 32px;
        text-align: center;
        border-top: 1px solid rgba(232, 216, 183, 0.2);
    }
    .awareness-cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; margin-bottom: 32px; }
    .awareness-icon {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        margin: 0 auto 16px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(232, 216, 183, 0.1);
    }
    .site-footer { background: #072a1f; border-top: 1px solid rgba(232, 216, 183, 0.2); padding: 48px 32px; }
    .footer-grid { max-width: 1280px; margin: 0 auto; display: grid; grid-template-columns: repeat(4, 1fr); gap: 32px; }
    .footer-list { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 8px; font-size: 14px; }
    .social-links { display: flex; gap: 16px; }
    .subscribe { display: flex; gap: 8px; }
    .subscribe-input {
        flex: 1;
        padding: 8px 12px;
        border-radius: 6px;
        background: #0a3b2c;
        color: #e8d8b7;
        border: 1px solid rgba(232, 216, 183, 0.3);
    }
    .footer-separator { border: none; border-top: 1px solid rgba(232, 216, 183, 0.2); margin: 32px auto; max-width: 1280px; }
    .footer-bottom { max-width: 1280px; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; }
    .footer-legal { display: flex; gap: 24px; }
    @media (max-width: 768px) {
        .site-nav { display: none; }
        .hero-title, .nyc-title { font-size: 36px; }
        .hero-subtitle { font-size: 20px; }
        .countdown { gap: 8px; }
        .countdown-value { font-size: 30px; }
        .steps, .split, .awareness-cards, .footer-grid { grid-template-columns: 1fr; }
        .story-tab-label { display: none; }
        .footer-bottom { flex-direction: column; gap: 16px; }
    }
"#;
