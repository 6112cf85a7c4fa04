use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ScorePanelProps {
    pub score: u32,
    pub words: Vec<String>,
}

/// Running score and the list of found words, one point per letter.
#[function_component(ScorePanel)]
pub fn score_panel(props: &ScorePanelProps) -> Html {
    html! {
        <div class="border-t border-gray-200 dark:border-gray-700 pt-4">
            <div class={classes!(styles::TEXT_BODY, "flex", "justify-between", "mb-2")}>
                <span class="font-medium">{ "Score" }</span>
                <span class="score">{ props.score }</span>
            </div>
            <ul class={classes!("words", "space-y-1", styles::TEXT_BODY)}>
                { for props.words.iter().map(|word| html! {
                    <li key={word.clone()}>{ word }</li>
                }) }
            </ul>
        </div>
    }
}
