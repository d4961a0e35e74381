//! A reusable modal dialog surface.
//!
//! Renders a full-screen overlay with a centered panel, a title and a
//! close control. Callers supply the title, the target the close
//! control navigates to, and the panel content. Whether the dialog is
//! on the page at all is the caller's decision; the dialog itself
//! holds no open/close state.

use maud::{Markup, html};

pub const DIALOG_OVERLAY_STYLE: &str = "fixed inset-0 z-40 bg-gray-900/75";

pub const DIALOG_PANEL_STYLE: &str = "w-full max-w-md rounded-lg bg-white \
    dark:bg-gray-800 p-6 shadow-xl text-gray-900 dark:text-white";

pub const DIALOG_CLOSE_STYLE: &str = "text-2xl leading-none text-gray-400 \
    hover:text-gray-600 dark:hover:text-gray-200";

pub fn dialog(title: &str, close_href: &str, content: &Markup) -> Markup {
    html! {
        div class=(DIALOG_OVERLAY_STYLE) {}

        div
            role="dialog"
            aria-modal="true"
            aria-labelledby="dialog-title"
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
        {
            div class=(DIALOG_PANEL_STYLE)
            {
                div class="flex items-start justify-between"
                {
                    h2 id="dialog-title" class="text-xl font-bold" { (title) }

                    a
                        href=(close_href)
                        aria-label="Fechar"
                        class=(DIALOG_CLOSE_STYLE)
                    {
                        "\u{00d7}"
                    }
                }

                (content)
            }
        }
    }
}
