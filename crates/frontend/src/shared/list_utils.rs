/// Утилиты для списков: поле поиска и CSS-классы активных элементов
use leptos::prelude::*;

/// Класс активной вкладки/кнопки
pub fn active_class(base: &'static str, is_active: bool) -> String {
    if is_active {
        format!("{} is-active", base).trim().to_string()
    } else {
        base.to_string()
    }
}

/// Компонент поиска с кнопкой очистки.
///
/// Значение передается наверх на каждое нажатие клавиши, без debounce.
#[component]
pub fn SearchInput(
    /// Текущее значение поиска
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения
    #[prop(into)]
    on_change: Callback<String>,
    /// Показывать ли кнопку очистки
    #[prop(into)]
    show_clear: Signal<bool>,
    /// Callback кнопки очистки
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <p class="control has-icons-left has-icons-right">
            <input
                data-cy="SearchField"
                type="text"
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />

            <span class="icon is-left">
                {crate::shared::icons::icon("search")}
            </span>

            <Show when=move || show_clear.get()>
                <span class="icon is-right">
                    <button
                        data-cy="ClearButton"
                        aria-label="Clear input"
                        type="button"
                        class="delete"
                        on:click=move |_| on_clear.run(())
                    ></button>
                </span>
            </Show>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_class() {
        assert_eq!(active_class("", true), "is-active");
        assert_eq!(active_class("", false), "");
        assert_eq!(active_class("button", true), "button is-active");
        assert_eq!(active_class("button", false), "button");
    }
}
