//! CardAnimated: a Thaw Card that fades in on mount.
//!
//! The animation is defined in `style/main.css` (`@keyframes card-appear`).
//!
//! # Example
//! ```rust,ignore
//! // Staggered cards
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay step between neighbouring cards of a grid
pub const STAGGER_STEP_MS: u32 = 80;

/// Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for the stagger effect).
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS class names for the card.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

/// Delay for the card at `index`, capped so late pages do not wait long
pub fn stagger_delay(index: usize) -> u32 {
    (index.min(5) as u32) * STAGGER_STEP_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 160);
        assert_eq!(stagger_delay(40), 400);
    }
}
