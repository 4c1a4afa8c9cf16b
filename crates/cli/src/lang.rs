//! Interface locales and message catalogs
//!
//! Every user-facing string lives here, keyed by [`MessageKey`]. Lookup is
//! an exhaustive `match` per locale, so a missing translation fails to
//! compile instead of surfacing as a runtime hole. The core never sees a
//! locale; error kinds are mapped to message keys at this boundary.

use clap::ValueEnum;

use gorev_core::Error;

/// Display language of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    Turkish,
    English,
}

impl Locale {
    /// The other locale, for the language-switch menu entry
    pub fn toggled(self) -> Self {
        match self {
            Self::Turkish => Self::English,
            Self::English => Self::Turkish,
        }
    }
}

/// Key of one user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    AppTitle,
    MenuList,
    MenuAdd,
    MenuEdit,
    MenuDelete,
    MenuToggle,
    MenuSort,
    MenuLanguage,
    MenuExit,
    MenuChoice,
    InvalidChoice,
    NoTasks,
    TaskListHeader,
    EnterTask,
    EnterDueDate,
    EnterPriority,
    EnterCompleted,
    EnterTaskNum,
    EnterNewTask,
    EnterNewDueDate,
    EnterNewPriority,
    InvalidTaskNum,
    InvalidPriority,
    EmptyTask,
    InvalidDate,
    TaskAdded,
    TaskEdited,
    TaskDeleted,
    FileError,
    MalformedFile,
    ConfirmDelete,
    Yes,
    SortPrompt,
    LowPriority,
    MediumPriority,
    HighPriority,
    LangChanged,
    Goodbye,
}

impl MessageKey {
    /// Every key, for catalog tests
    pub const ALL: [MessageKey; 38] = [
        Self::AppTitle,
        Self::MenuList,
        Self::MenuAdd,
        Self::MenuEdit,
        Self::MenuDelete,
        Self::MenuToggle,
        Self::MenuSort,
        Self::MenuLanguage,
        Self::MenuExit,
        Self::MenuChoice,
        Self::InvalidChoice,
        Self::NoTasks,
        Self::TaskListHeader,
        Self::EnterTask,
        Self::EnterDueDate,
        Self::EnterPriority,
        Self::EnterCompleted,
        Self::EnterTaskNum,
        Self::EnterNewTask,
        Self::EnterNewDueDate,
        Self::EnterNewPriority,
        Self::InvalidTaskNum,
        Self::InvalidPriority,
        Self::EmptyTask,
        Self::InvalidDate,
        Self::TaskAdded,
        Self::TaskEdited,
        Self::TaskDeleted,
        Self::FileError,
        Self::MalformedFile,
        Self::ConfirmDelete,
        Self::Yes,
        Self::SortPrompt,
        Self::LowPriority,
        Self::MediumPriority,
        Self::HighPriority,
        Self::LangChanged,
        Self::Goodbye,
    ];
}

/// Look up the display string for `key` in `locale`
pub fn message(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::Turkish => turkish(key),
        Locale::English => english(key),
    }
}

/// Message key a store error is rendered with
///
/// `MalformedFile` and `FileError` are prefixes; the error's detail
/// string is appended by the caller.
pub fn error_key(err: &Error) -> MessageKey {
    match err {
        Error::EmptyTask => MessageKey::EmptyTask,
        Error::InvalidDateFormat(_) => MessageKey::InvalidDate,
        Error::IndexOutOfRange(_) => MessageKey::InvalidTaskNum,
        Error::MalformedRecord(_) => MessageKey::MalformedFile,
        Error::Persistence(_) => MessageKey::FileError,
    }
}

fn turkish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::AppTitle => "Görev Yönetim Uygulaması",
        MessageKey::MenuList => "1. Görevleri Listele",
        MessageKey::MenuAdd => "2. Yeni Görev Ekle",
        MessageKey::MenuEdit => "3. Görev Düzenle",
        MessageKey::MenuDelete => "4. Görev Sil",
        MessageKey::MenuToggle => "5. Tamamlandı İşaretini Değiştir",
        MessageKey::MenuSort => "6. Sıralı Listele",
        MessageKey::MenuLanguage => "7. Dil Değiştir / Change Language",
        MessageKey::MenuExit => "8. Çıkış",
        MessageKey::MenuChoice => "Seçiminizi yapın: ",
        MessageKey::InvalidChoice => "Geçersiz seçim! Lütfen tekrar deneyin.",
        MessageKey::NoTasks => "Hiç görev bulunamadı!",
        MessageKey::TaskListHeader => "--- Görevler ---",
        MessageKey::EnterTask => "Görev metni: ",
        MessageKey::EnterDueDate => "Son tarih (YYYY-MM-DD, boş bırakılabilir): ",
        MessageKey::EnterPriority => "Öncelik (low/medium/high, boş: medium): ",
        MessageKey::EnterCompleted => "Tamamlandı mı? (e/h): ",
        MessageKey::EnterTaskNum => "Görev numarası: ",
        MessageKey::EnterNewTask => "Yeni görev metni (boş: değiştirme): ",
        MessageKey::EnterNewDueDate => {
            "Yeni son tarih (YYYY-MM-DD, boş: değiştirme, '-': sil): "
        }
        MessageKey::EnterNewPriority => "Yeni öncelik (low/medium/high, boş: değiştirme): ",
        MessageKey::InvalidTaskNum => "Geçersiz görev numarası!",
        MessageKey::InvalidPriority => "Geçersiz öncelik!",
        MessageKey::EmptyTask => "Boş görev eklenemez!",
        MessageKey::InvalidDate => "Geçersiz tarih formatı! YYYY-MM-DD formatını kullanın.",
        MessageKey::TaskAdded => "Görev eklendi.",
        MessageKey::TaskEdited => "Görev düzenlendi.",
        MessageKey::TaskDeleted => "Görev silindi.",
        MessageKey::FileError => "Dosya işlemi sırasında bir hata oluştu: ",
        MessageKey::MalformedFile => "Görev dosyasındaki kayıt okunamadı: ",
        MessageKey::ConfirmDelete => {
            "Bu görevi silmek istediğinizden emin misiniz? (e/h): "
        }
        MessageKey::Yes => "Evet",
        MessageKey::SortPrompt => "Sıralama ölçütü (1: İsim, 2: Öncelik, 3: Tarih): ",
        MessageKey::LowPriority => "Düşük",
        MessageKey::MediumPriority => "Orta",
        MessageKey::HighPriority => "Yüksek",
        MessageKey::LangChanged => "Dil Türkçe olarak değiştirildi.",
        MessageKey::Goodbye => "Programdan çıkılıyor. Hoşçakalın!",
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::AppTitle => "Task Management Application",
        MessageKey::MenuList => "1. List Tasks",
        MessageKey::MenuAdd => "2. Add New Task",
        MessageKey::MenuEdit => "3. Edit Task",
        MessageKey::MenuDelete => "4. Delete Task",
        MessageKey::MenuToggle => "5. Toggle Completed",
        MessageKey::MenuSort => "6. Sorted Listing",
        MessageKey::MenuLanguage => "7. Change Language / Dil Değiştir",
        MessageKey::MenuExit => "8. Exit",
        MessageKey::MenuChoice => "Enter your choice: ",
        MessageKey::InvalidChoice => "Invalid choice! Please try again.",
        MessageKey::NoTasks => "No tasks found!",
        MessageKey::TaskListHeader => "--- Tasks ---",
        MessageKey::EnterTask => "Task text: ",
        MessageKey::EnterDueDate => "Due date (YYYY-MM-DD, leave blank for none): ",
        MessageKey::EnterPriority => "Priority (low/medium/high, blank: medium): ",
        MessageKey::EnterCompleted => "Completed? (y/n): ",
        MessageKey::EnterTaskNum => "Task number: ",
        MessageKey::EnterNewTask => "New task text (blank keeps current): ",
        MessageKey::EnterNewDueDate => {
            "New due date (YYYY-MM-DD, blank keeps current, '-' clears): "
        }
        MessageKey::EnterNewPriority => "New priority (low/medium/high, blank keeps current): ",
        MessageKey::InvalidTaskNum => "Invalid task number!",
        MessageKey::InvalidPriority => "Invalid priority!",
        MessageKey::EmptyTask => "Cannot add empty task!",
        MessageKey::InvalidDate => "Invalid date format! Please use YYYY-MM-DD format.",
        MessageKey::TaskAdded => "Task added.",
        MessageKey::TaskEdited => "Task edited.",
        MessageKey::TaskDeleted => "Task deleted.",
        MessageKey::FileError => "An error occurred during file operation: ",
        MessageKey::MalformedFile => "Malformed record in task file: ",
        MessageKey::ConfirmDelete => "Are you sure you want to delete this task? (y/n): ",
        MessageKey::Yes => "Yes",
        MessageKey::SortPrompt => "Sort by (1: Name, 2: Priority, 3: Date): ",
        MessageKey::LowPriority => "Low",
        MessageKey::MediumPriority => "Medium",
        MessageKey::HighPriority => "High",
        MessageKey::LangChanged => "Language changed to English.",
        MessageKey::Goodbye => "Exiting program. Goodbye!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_complete() {
        for locale in [Locale::Turkish, Locale::English] {
            for key in MessageKey::ALL {
                assert!(
                    !message(locale, key).is_empty(),
                    "empty message for {:?} in {:?}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn test_error_kinds_map_to_distinct_messages() {
        let errors = [
            Error::EmptyTask,
            Error::InvalidDateFormat("x".into()),
            Error::IndexOutOfRange(9),
            Error::MalformedRecord("no text".into()),
            Error::Persistence("io".into()),
        ];
        for locale in [Locale::Turkish, Locale::English] {
            let mut messages: Vec<&str> = errors
                .iter()
                .map(|e| message(locale, error_key(e)))
                .collect();
            messages.sort();
            messages.dedup();
            assert_eq!(messages.len(), errors.len());
        }
    }

    #[test]
    fn test_locale_toggle_round_trips() {
        assert_eq!(Locale::Turkish.toggled(), Locale::English);
        assert_eq!(Locale::English.toggled().toggled(), Locale::English);
    }
}
