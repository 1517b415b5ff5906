//! UI string tables
//!
//! Two built-in languages. Labels are looked up on every frame, so switching
//! language takes effect immediately in both windows.

use crate::markdown::SnippetAction;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLanguage {
    #[default]
    Uk,
    En,
}

impl UiLanguage {
    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            UiLanguage::Uk => UiLanguage::En,
            UiLanguage::En => UiLanguage::Uk,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            UiLanguage::Uk => "uk",
            UiLanguage::En => "en",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            UiLanguage::Uk => &UK,
            UiLanguage::En => &EN,
        }
    }
}

/// Every user-visible label.
#[derive(Debug)]
pub struct Strings {
    pub hide_editors: &'static str,
    pub show_editors: &'static str,
    pub horizontal_mode: &'static str,
    pub tab_mode: &'static str,
    pub project_name: &'static str,
    pub save: &'static str,
    pub projects: &'static str,
    pub new_project: &'static str,
    pub export: &'static str,
    pub settings: &'static str,
    pub language: &'static str,
    pub projects_title: &'static str,
    pub settings_title: &'static str,
    pub saved: &'static str,
    pub confirm_new: &'static str,
    pub confirm_delete: &'static str,
    pub no_projects: &'static str,
    pub theme: &'static str,
    pub font_size: &'static str,
    pub autosave_interval: &'static str,
    pub save_settings: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub open_in_browser: &'static str,
    pub preview: &'static str,
    pub return_editor: &'static str,
    pub toggle_preview: &'static str,
    pub exported: &'static str,
    pub export_failed: &'static str,
    pub editor_window_title: &'static str,
    pub placeholder_text: &'static str,
    // Markdown toolbar tooltips
    pub heading1: &'static str,
    pub heading2: &'static str,
    pub bold: &'static str,
    pub italic: &'static str,
    pub bullet_list: &'static str,
    pub link: &'static str,
    pub code_block: &'static str,
    pub quote: &'static str,
    pub image: &'static str,
}

impl Strings {
    /// Tooltip for a Markdown toolbar button.
    pub fn snippet_tooltip(&self, action: SnippetAction) -> &'static str {
        match action {
            SnippetAction::Heading1 => self.heading1,
            SnippetAction::Heading2 => self.heading2,
            SnippetAction::Bold => self.bold,
            SnippetAction::Italic => self.italic,
            SnippetAction::List => self.bullet_list,
            SnippetAction::Link => self.link,
            SnippetAction::Code => self.code_block,
            SnippetAction::Quote => self.quote,
            SnippetAction::Image => self.image,
        }
    }
}

pub static UK: Strings = Strings {
    hide_editors: "Приховати редактори",
    show_editors: "Показати редактори",
    horizontal_mode: "Горизонтальний режим",
    tab_mode: "Режим вкладок",
    project_name: "Назва проєкту",
    save: "Зберегти (Ctrl+S)",
    projects: "Проєкти",
    new_project: "Новий проєкт",
    export: "Експорт",
    settings: "Налаштування",
    language: "Мова",
    projects_title: "Проєкти",
    settings_title: "Налаштування",
    saved: "Збережено",
    confirm_new: "Створити новий проєкт? Незбережені зміни будуть втрачені.",
    confirm_delete: "Видалити",
    no_projects: "Немає збережених проєктів",
    theme: "Тема",
    font_size: "Розмір шрифту",
    autosave_interval: "Автозбереження (сек)",
    save_settings: "Зберегти",
    cancel: "Скасувати",
    confirm: "Так",
    close: "Закрити",
    open_in_browser: "Відкрити в браузері",
    preview: "Попередній перегляд",
    return_editor: "Повернути редактор",
    toggle_preview: "Перегляд Markdown",
    exported: "Експортовано",
    export_failed: "Помилка експорту",
    editor_window_title: "StatCode - Редактор",
    placeholder_text: "Текст",
    heading1: "Заголовок 1",
    heading2: "Заголовок 2",
    bold: "Жирний",
    italic: "Курсив",
    bullet_list: "Список",
    link: "Посилання",
    code_block: "Код",
    quote: "Цитата",
    image: "Зображення",
};

pub static EN: Strings = Strings {
    hide_editors: "Hide Editors",
    show_editors: "Show Editors",
    horizontal_mode: "Horizontal Mode",
    tab_mode: "Tab Mode",
    project_name: "Project Name",
    save: "Save (Ctrl+S)",
    projects: "Projects",
    new_project: "New Project",
    export: "Export",
    settings: "Settings",
    language: "Language",
    projects_title: "Projects",
    settings_title: "Settings",
    saved: "Saved",
    confirm_new: "Create a new project? Unsaved changes will be lost.",
    confirm_delete: "Delete",
    no_projects: "No saved projects",
    theme: "Theme",
    font_size: "Font size",
    autosave_interval: "Autosave (sec)",
    save_settings: "Save",
    cancel: "Cancel",
    confirm: "Yes",
    close: "Close",
    open_in_browser: "Open in Browser",
    preview: "Preview",
    return_editor: "Return Editor",
    toggle_preview: "Markdown Preview",
    exported: "Exported",
    export_failed: "Export failed",
    editor_window_title: "StatCode - Editor",
    placeholder_text: "Text",
    heading1: "Heading 1",
    heading2: "Heading 2",
    bold: "Bold",
    italic: "Italic",
    bullet_list: "List",
    link: "Link",
    code_block: "Code",
    quote: "Quote",
    image: "Image",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ukrainian() {
        assert_eq!(UiLanguage::default(), UiLanguage::Uk);
        assert_eq!(UiLanguage::default().strings().placeholder_text, "Текст");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(UiLanguage::Uk.toggled(), UiLanguage::En);
        assert_eq!(UiLanguage::En.toggled(), UiLanguage::Uk);
        assert_eq!(UiLanguage::En.strings().saved, "Saved");
        assert_eq!(UiLanguage::En.code(), "en");
    }

    #[test]
    fn test_snippet_tooltips_follow_language() {
        assert_eq!(EN.snippet_tooltip(SnippetAction::Bold), "Bold");
        assert_eq!(UK.snippet_tooltip(SnippetAction::Bold), "Жирний");
        for action in SnippetAction::ALL {
            assert!(!UK.snippet_tooltip(action).is_empty());
            assert_ne!(UK.snippet_tooltip(action), EN.snippet_tooltip(action));
        }
    }
}
