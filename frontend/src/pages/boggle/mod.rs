mod score_panel;

use yew::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use log::error;
use shared::shared_boggle_game::{
    CheckWordResponse, GameSession, MessageKind, PostScoreRequest, PostScoreResponse,
    StatusMessage, Submission, WordVerdict, DEFAULT_GAME_SECONDS,
};
use crate::config::get_api_base_url;
use crate::styles;
use score_panel::ScorePanel;

pub enum Msg {
    Tick,
    Submit(SubmitEvent),
    Checked { word: String, verdict: WordVerdict },
    CheckFailed(StatusMessage),
    Scored(bool),
    ScoreFailed,
}

#[derive(Properties, PartialEq)]
pub struct BoggleProps {
    /// Game length in seconds
    #[prop_or(DEFAULT_GAME_SECONDS)]
    pub secs: u32,
}

pub struct BoggleGame {
    session: GameSession,
    message: Option<StatusMessage>,
    checking: bool,
    input_ref: NodeRef,
    timer: Option<Interval>,
}

impl Component for BoggleGame {
    type Message = Msg;
    type Properties = BoggleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            session: GameSession::new(ctx.props().secs),
            message: None,
            checking: false,
            input_ref: NodeRef::default(),
            // One repeating timer per session, dropped at time-up
            timer: Some(Interval::new(1000, move || link.send_message(Msg::Tick))),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                if self.session.tick() {
                    self.timer = None;
                    self.post_score(ctx);
                }
                true
            }
            Msg::Submit(e) => {
                e.prevent_default();
                let Some(input) = self.input_ref.cast::<HtmlInputElement>() else {
                    return false;
                };
                match self.session.submit(&input.value()) {
                    // Empty input leaves the field untouched
                    Submission::Ignored => return false,
                    Submission::Duplicate(msg) => self.message = Some(msg),
                    Submission::Check(word) => {
                        // One validation round trip at a time; submissions made
                        // while a check is in flight are dropped
                        if !self.checking {
                            self.checking = true;
                            self.check_word(ctx, word);
                        }
                    }
                }
                // The entry field is cleared and refocused whether the word
                // was accepted, rejected, or a duplicate
                input.set_value("");
                let _ = input.focus();
                true
            }
            Msg::Checked { word, verdict } => {
                self.checking = false;
                if let Some(msg) = self.session.resolve(&word, verdict) {
                    self.message = Some(msg);
                }
                true
            }
            Msg::CheckFailed(msg) => {
                self.checking = false;
                if let Some(msg) = self.session.check_failed(msg) {
                    self.message = Some(msg);
                }
                true
            }
            Msg::Scored(broke_record) => {
                self.message = Some(self.session.final_message(broke_record));
                true
            }
            Msg::ScoreFailed => {
                self.message = Some(StatusMessage::err(
                    "Couldn't record your score. Please check your connection.",
                ));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(Msg::Submit);

        html! {
            <div class="max-w-md mx-auto py-16">
                <div class={styles::CARD}>
                    <div class="flex items-center justify-between mb-4">
                        <h1 class={styles::TEXT_H1}>{ "Boggle" }</h1>
                        <div class={classes!("timer", styles::TEXT_H2)}>
                            { self.session.remaining_seconds }
                        </div>
                    </div>

                    if let Some(msg) = &self.message {
                        <div class={classes!("msg", message_style(msg.kind), "mb-4")}>
                            { &msg.text }
                        </div>
                    }

                    if !self.session.finished {
                        <form class="add-word mb-4" {onsubmit}>
                            <input
                                ref={self.input_ref.clone()}
                                type="text"
                                placeholder="Type a word"
                                autocomplete="off"
                                class={classes!("word", styles::INPUT)}
                            />
                            <button
                                type="submit"
                                disabled={self.checking}
                                class={classes!(styles::BUTTON_PRIMARY, "mt-3", "w-full")}
                            >
                                { "Add Word" }
                            </button>
                        </form>
                    } else {
                        <div class={classes!(styles::TEXT_BODY, "text-center", "mb-4")}>
                            { "Time's up!" }
                        </div>
                    }

                    <ScorePanel
                        score={self.session.score}
                        words={self.session.found_words.clone()}
                    />
                </div>
            </div>
        }
    }
}

impl BoggleGame {
    fn check_word(&self, ctx: &Context<Self>, word: String) {
        let link = ctx.link().clone();

        spawn_local(async move {
            let url = format!("{}/check-word", get_api_base_url());
            match Request::get(&url).query([("word", word.as_str())]).send().await {
                Ok(response) => match response.json::<CheckWordResponse>().await {
                    Ok(data) => {
                        let verdict = WordVerdict::parse(&data.result);
                        link.send_message(Msg::Checked { word, verdict });
                    }
                    Err(e) => {
                        error!("bad check-word response: {:?}", e);
                        link.send_message(Msg::CheckFailed(StatusMessage::err(
                            "Server error. Please try again.",
                        )));
                    }
                },
                Err(e) => {
                    error!("check-word request failed: {:?}", e);
                    link.send_message(Msg::CheckFailed(StatusMessage::err(
                        "Network error. Please check your connection.",
                    )));
                }
            }
        });
    }

    fn post_score(&self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let payload = PostScoreRequest { score: self.session.score };

        spawn_local(async move {
            let url = format!("{}/post-score", get_api_base_url());
            match Request::post(&url).json(&payload).unwrap().send().await {
                Ok(response) => match response.json::<PostScoreResponse>().await {
                    Ok(data) => link.send_message(Msg::Scored(data.broke_record)),
                    Err(e) => {
                        error!("bad post-score response: {:?}", e);
                        link.send_message(Msg::ScoreFailed);
                    }
                },
                Err(e) => {
                    error!("post-score request failed: {:?}", e);
                    link.send_message(Msg::ScoreFailed);
                }
            }
        });
    }
}

fn message_style(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Ok => styles::ALERT_SUCCESS,
        MessageKind::Err => styles::ALERT_ERROR,
    }
}
