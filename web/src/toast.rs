use vanish_core::{GameEvent, GameResult};
use yew::prelude::*;

/// How long a toast stays on screen unless dismissed earlier.
pub(crate) const TOAST_DURATION_MS: u32 = 3000;

pub(crate) type ToastId = u32;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
}

impl Toast {
    fn for_event(id: ToastId, event: &GameEvent) -> Self {
        let (title, description) = match *event {
            GameEvent::Vanished { player, .. } => (
                format!("{}'s First Move Vanished", player),
                format!("Player {}'s first placed mark has disappeared!", player),
            ),
            GameEvent::Finished(GameResult::Win(player)) => {
                ("Game Over".to_string(), format!("Player {} wins!", player))
            }
            GameEvent::Finished(GameResult::Draw) => {
                ("Game Over".to_string(), "It's a draw!".to_string())
            }
        };
        Self {
            id,
            title,
            description,
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ToastQueue {
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub(crate) fn push_event(&mut self, event: &GameEvent) -> ToastId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast::for_event(id, event));
        id
    }

    /// Removes the toast with `id`, returning whether it was still shown.
    pub(crate) fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub(crate) fn clear(&mut self) -> bool {
        let had_toasts = !self.toasts.is_empty();
        self.toasts.clear();
        had_toasts
    }

    pub(crate) fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ToastListProps {
    pub toasts: Vec<Toast>,
    pub ondismiss: Callback<ToastId>,
}

#[function_component(ToastList)]
pub(crate) fn toast_list(props: &ToastListProps) -> Html {
    html! {
        <ol class="toasts">
            {
                for props.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let onclick = props.ondismiss.reform(move |_: MouseEvent| id);
                    html! {
                        <li key={id} class="toast" {onclick}>
                            <strong>{toast.title.clone()}</strong>
                            <p>{toast.description.clone()}</p>
                        </li>
                    }
                })
            }
        </ol>
    }
}
