//! Built-in component styles shipped with the shell.

use once_cell::sync::Lazy;

use super::registry::{ComponentRegistry, ComponentStyles, SlotStyles, StyleMap};

static COMPONENTS: Lazy<ComponentRegistry> = Lazy::new(|| {
    ComponentRegistry::new()
        .component("button", button())
        .component("input", input())
        .component("badge", badge())
        .component("select", select())
        .component("modal", modal())
        .component("card", card())
});

pub(crate) fn components() -> &'static ComponentRegistry {
    &COMPONENTS
}

fn style(pairs: &[(&str, &str)]) -> StyleMap {
    pairs.iter().copied().collect()
}

fn button() -> ComponentStyles {
    ComponentStyles::new()
        .slot(
            "base",
            SlotStyles::new(
                "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 disabled:pointer-events-none disabled:opacity-50",
                "mfe-btn",
            )
            .computed(style(&[
                ("display", "inline-flex"),
                ("alignItems", "center"),
                ("justifyContent", "center"),
                ("borderRadius", "0.375rem"),
                ("fontSize", "0.875rem"),
                ("fontWeight", "500"),
            ])),
        )
        .slot(
            "size-sm",
            SlotStyles::new("h-9 px-3", "mfe-btn--sm").computed(style(&[
                ("height", "2.25rem"),
                ("paddingLeft", "0.75rem"),
                ("paddingRight", "0.75rem"),
            ])),
        )
        .slot(
            "size-md",
            SlotStyles::new("h-10 px-4 py-2", "mfe-btn--md").computed(style(&[
                ("height", "2.5rem"),
                ("paddingLeft", "1rem"),
                ("paddingRight", "1rem"),
            ])),
        )
        .slot(
            "size-lg",
            SlotStyles::new("h-11 px-8", "mfe-btn--lg").computed(style(&[
                ("height", "2.75rem"),
                ("paddingLeft", "2rem"),
                ("paddingRight", "2rem"),
            ])),
        )
        .slot(
            "variant-primary",
            SlotStyles::new(
                "bg-primary text-primary-foreground hover:bg-primary/90",
                "mfe-btn--primary",
            )
            .computed(style(&[
                ("backgroundColor", "var(--mfe-color-primary)"),
                ("color", "var(--mfe-color-primary-foreground)"),
            ])),
        )
        .slot(
            "variant-secondary",
            SlotStyles::new(
                "bg-secondary text-secondary-foreground hover:bg-secondary/80",
                "mfe-btn--secondary",
            )
            .computed(style(&[
                ("backgroundColor", "var(--mfe-color-secondary)"),
                ("color", "var(--mfe-color-secondary-foreground)"),
            ])),
        )
        .slot(
            "variant-outline",
            SlotStyles::new(
                "border border-input bg-background hover:bg-accent",
                "mfe-btn--outline",
            )
            .computed(style(&[
                ("border", "1px solid var(--mfe-color-input)"),
                ("backgroundColor", "var(--mfe-color-background)"),
            ])),
        )
        .slot(
            "variant-ghost",
            SlotStyles::new("hover:bg-accent hover:text-accent-foreground", "mfe-btn--ghost"),
        )
        .slot(
            "variant-destructive",
            SlotStyles::new(
                "bg-destructive text-destructive-foreground hover:bg-destructive/90",
                "mfe-btn--destructive",
            )
            .computed(style(&[
                ("backgroundColor", "var(--mfe-color-destructive)"),
                ("color", "var(--mfe-color-destructive-foreground)"),
            ])),
        )
}

fn input() -> ComponentStyles {
    ComponentStyles::new()
        .slot(
            "base",
            SlotStyles::new(
                "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm placeholder:text-muted-foreground disabled:cursor-not-allowed disabled:opacity-50",
                "mfe-input",
            )
            .computed(style(&[
                ("display", "flex"),
                ("height", "2.5rem"),
                ("width", "100%"),
                ("borderRadius", "0.375rem"),
                ("border", "1px solid var(--mfe-color-input)"),
                ("padding", "0.5rem 0.75rem"),
                ("fontSize", "0.875rem"),
            ])),
        )
        .slot(
            "state-error",
            SlotStyles::new(
                "border-destructive focus-visible:ring-destructive",
                "mfe-input--error",
            )
            .computed(style(&[("borderColor", "var(--mfe-color-destructive)")])),
        )
}

fn badge() -> ComponentStyles {
    ComponentStyles::new()
        .slot(
            "base",
            SlotStyles::new(
                "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold",
                "mfe-badge",
            )
            .computed(style(&[
                ("display", "inline-flex"),
                ("alignItems", "center"),
                ("borderRadius", "9999px"),
                ("padding", "0.125rem 0.625rem"),
                ("fontSize", "0.75rem"),
                ("fontWeight", "600"),
            ])),
        )
        .slot(
            "variant-default",
            SlotStyles::new(
                "border-transparent bg-primary text-primary-foreground",
                "mfe-badge--default",
            )
            .computed(style(&[
                ("backgroundColor", "var(--mfe-color-primary)"),
                ("color", "var(--mfe-color-primary-foreground)"),
            ])),
        )
        .slot(
            "variant-success",
            SlotStyles::new(
                "border-transparent bg-success text-success-foreground",
                "mfe-badge--success",
            )
            .computed(style(&[
                ("backgroundColor", "var(--mfe-color-success)"),
                ("color", "var(--mfe-color-success-foreground)"),
            ])),
        )
        .slot(
            "variant-outline",
            SlotStyles::new("text-foreground", "mfe-badge--outline"),
        )
}

fn select() -> ComponentStyles {
    ComponentStyles::new()
        .slot(
            "trigger",
            SlotStyles::new(
                "flex h-10 w-full items-center justify-between rounded-md border border-input bg-background px-3 py-2 text-sm",
                "mfe-select__trigger",
            )
            .computed(style(&[
                ("display", "flex"),
                ("alignItems", "center"),
                ("justifyContent", "space-between"),
                ("height", "2.5rem"),
                ("width", "100%"),
            ])),
        )
        .slot(
            "content",
            SlotStyles::new(
                "relative z-50 min-w-[8rem] overflow-hidden rounded-md border bg-popover text-popover-foreground shadow-md",
                "mfe-select__content",
            )
            .computed(style(&[
                ("position", "relative"),
                ("zIndex", "50"),
                ("minWidth", "8rem"),
                ("overflow", "hidden"),
            ])),
        )
        .slot(
            "item",
            SlotStyles::new(
                "relative flex w-full cursor-default select-none items-center rounded-sm py-1.5 pl-8 pr-2 text-sm outline-none focus:bg-accent",
                "mfe-select__item",
            ),
        )
}

fn modal() -> ComponentStyles {
    ComponentStyles::new()
        .slot(
            "overlay",
            SlotStyles::new("fixed inset-0 z-50 bg-black/80", "mfe-modal__overlay").computed(
                style(&[
                    ("position", "fixed"),
                    ("inset", "0"),
                    ("zIndex", "50"),
                    ("backgroundColor", "rgba(0, 0, 0, 0.8)"),
                ]),
            ),
        )
        .slot(
            "content",
            SlotStyles::new(
                "fixed left-1/2 top-1/2 z-50 grid w-full max-w-lg -translate-x-1/2 -translate-y-1/2 gap-4 border bg-background p-6 shadow-lg sm:rounded-lg",
                "mfe-modal__content",
            )
            .computed(style(&[
                ("position", "fixed"),
                ("left", "50%"),
                ("top", "50%"),
                ("zIndex", "50"),
                ("maxWidth", "32rem"),
                ("transform", "translate(-50%, -50%)"),
                ("padding", "1.5rem"),
            ])),
        )
        .slot(
            "header",
            SlotStyles::new("flex flex-col space-y-1.5 text-center sm:text-left", "mfe-modal__header"),
        )
        .slot(
            "footer",
            SlotStyles::new(
                "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2",
                "mfe-modal__footer",
            ),
        )
}

fn card() -> ComponentStyles {
    ComponentStyles::new()
        .slot(
            "base",
            SlotStyles::new(
                "rounded-lg border bg-card text-card-foreground shadow-sm",
                "mfe-card",
            )
            .computed(style(&[
                ("borderRadius", "0.5rem"),
                ("border", "1px solid var(--mfe-color-border)"),
                ("backgroundColor", "var(--mfe-color-card)"),
            ])),
        )
        .slot(
            "header",
            SlotStyles::new("flex flex-col space-y-1.5 p-6", "mfe-card__header")
                .computed(style(&[("padding", "1.5rem")])),
        )
        .slot(
            "content",
            SlotStyles::new("p-6 pt-0", "mfe-card__content")
                .computed(style(&[("padding", "0 1.5rem 1.5rem")])),
        )
}
