use yew::prelude::*;
use yew_router::prelude::Link;
use crate::{styles, Route};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="max-w-md mx-auto py-16">
            <div class={styles::CARD}>
                <h1 class={classes!(styles::TEXT_H1, "mb-4", "text-center")}>{ "Boggle" }</h1>
                <div class={classes!(styles::TEXT_BODY, "mb-6")}>
                    <h2 class={classes!(styles::TEXT_H2, "mb-3")}>{ "How to Play" }</h2>
                    <ul class="space-y-2 list-disc list-inside">
                        <li>{ "Find as many words on the board as you can before the timer runs out." }</li>
                        <li>{ "Each word scores one point per letter, and only counts once." }</li>
                        <li>{ "Words must be real English words made from adjacent board letters." }</li>
                    </ul>
                </div>
                <div class="flex justify-center">
                    <Link<Route> to={Route::Play} classes={classes!(styles::BUTTON_PRIMARY)}>
                        { "Start Game" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
