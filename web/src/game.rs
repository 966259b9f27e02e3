use crate::theme::Theme;
use crate::toast::*;
use gloo::timers::callback::Timeout;
use vanish_core::{self as game, BOARD_CELLS, CellIndex, GameEngine, GameStatus, Mark};
use yew::prelude::*;

const RULES: &str = "Rules: Place your mark (X or O) in any empty cell. When a player places \
                     their fourth mark, their first placed mark will disappear.";

const fn mark_class(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "mark-x",
        Mark::O => "mark-o",
    }
}

fn status_headline(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(mark) => Some(format!("Player {} Wins!", mark)),
        GameStatus::Draw => Some("It's a Draw!".to_string()),
    }
}

fn vanish_warning_text(engine: &GameEngine) -> Option<String> {
    engine.vanish_warning().then(|| {
        format!(
            "{}'s next move will make their first mark vanish!",
            engine.turn()
        )
    })
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(CellIndex),
    Reset,
    DismissToast(ToastId),
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    mark: Option<Mark>,
    #[prop_or_default]
    playable: bool,
    #[prop_or_default]
    vanish_next: bool,
    #[prop_or_default]
    winning: bool,
    onplay: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        mark,
        playable,
        vanish_next,
        winning,
        onplay,
    } = props.clone();

    let class = classes!(
        "board-cell",
        match mark {
            Some(Mark::X) => Some("board-cell-x"),
            Some(Mark::O) => Some("board-cell-o"),
            None => None,
        },
        playable.then_some("playable"),
        vanish_next.then_some("vanish-next"),
        winning.then_some("winning"),
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        if playable {
            onplay.emit(index);
        }
    });

    html! {
        <div {class} {onclick}>
            if let Some(mark) = mark {
                <span class={classes!("mark", mark_class(mark), "animate-scale-in")}>
                    {mark.symbol()}
                </span>
            }
        </div>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: GameEngine,
    toasts: ToastQueue,
    toast_timers: Vec<(ToastId, Timeout)>,
    theme: Theme,
}

impl GameView {
    fn play(&mut self, ctx: &Context<Self>, index: CellIndex) -> bool {
        let outcome = self.engine.apply_move(index.into());
        if !outcome.has_update() {
            return false;
        }
        log::debug!("played {:?}, now {:?}", outcome.placed(), self.engine.status());

        for event in outcome.events() {
            let id = self.toasts.push_event(event);
            let link = ctx.link().clone();
            let timer = Timeout::new(TOAST_DURATION_MS, move || {
                link.send_message(Msg::DismissToast(id))
            });
            self.toast_timers.push((id, timer));
        }
        true
    }

    fn dismiss_toast(&mut self, id: ToastId) -> bool {
        // dropping the timer cancels it if it has not fired yet
        self.toast_timers.retain(|(timer_id, _)| *timer_id != id);
        self.toasts.dismiss(id)
    }

    fn reset(&mut self) -> bool {
        self.engine.reset();
        self.toast_timers.clear();
        self.toasts.clear();
        true
    }

    fn view_cell(&self, ctx: &Context<Self>, index: CellIndex) -> Html {
        let mark = self.engine.cell_at(index).mark();
        let playable = self.engine.can_play_at(index.into());
        let vanish_next = self.engine.next_to_vanish() == Some(index);
        let winning = self
            .engine
            .winning_line()
            .is_some_and(|line| line.contains(&index));
        let onplay = ctx.link().callback(Msg::Play);

        html! {
            <CellView key={index} {index} {mark} {playable} {vanish_next} {winning} {onplay}/>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: GameEngine::new(),
            toasts: ToastQueue::default(),
            toast_timers: Vec::new(),
            theme: Theme::init(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Play(index) => self.play(ctx, index),
            Reset => {
                log::debug!("reset game");
                self.reset()
            }
            DismissToast(id) => self.dismiss_toast(id),
            ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme.apply();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let turn = self.engine.turn();
        let warning = vanish_warning_text(&self.engine);
        let headline = status_headline(self.engine.status());
        let cells: Vec<CellIndex> = (0..BOARD_CELLS).filter_map(game::to_cell_index).collect();

        let cb_reset = ctx.link().callback(|_: MouseEvent| Msg::Reset);
        let cb_theme = ctx.link().callback(|_: MouseEvent| Msg::ToggleTheme);
        let cb_dismiss = ctx.link().callback(Msg::DismissToast);

        html! {
            <div class="vanish">
                <h1 class="animate-fade-in">{"Vanishing Tic Tac Toe"}</h1>
                <section class="status">
                    <p>
                        {"Current Player: "}
                        <span class={classes!("player", mark_class(turn))}>{turn.symbol()}</span>
                    </p>
                    if let Some(warning) = warning {
                        <p class="warning">{warning}</p>
                    }
                </section>
                <div class={classes!("board", (!self.engine.is_finished()).then_some("playable"))}>
                    { for cells.into_iter().map(|index| self.view_cell(ctx, index)) }
                </div>
                if let Some(headline) = headline {
                    <h2 class="result animate-fade-in">{headline}</h2>
                }
                <nav>
                    <button class="reset" onclick={cb_reset}>{"Reset Game"}</button>
                    <button class="theme" onclick={cb_theme}>{self.theme.switch_label()}</button>
                </nav>
                <p class="rules">{RULES}</p>
                <ToastList toasts={self.toasts.toasts().to_vec()} ondismiss={cb_dismiss}/>
            </div>
        }
    }
}
