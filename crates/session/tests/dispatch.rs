//! End-to-end command dispatch through a scripted host shell.

use std::path::PathBuf;

use jotpad_session::{
    Command, Dialogs, EditorError, EditorSession, FindPrompt, MemoryClipboard, Outcome, Printer,
    ReplacePrompt, SearchDirection, Shell, TextClipboard,
};

/// Host double: scripted dialogs, in-memory clipboard, recording printer.
#[derive(Default)]
struct TestShell {
    open_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    find: Option<FindPrompt>,
    replace: Option<ReplacePrompt>,
    clipboard: MemoryClipboard,
    printed: Vec<String>,
}

impl Dialogs for TestShell {
    fn choose_open_path(&mut self) -> Option<PathBuf> {
        self.open_path.clone()
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        self.save_path.clone()
    }

    fn prompt_find(&mut self) -> Option<FindPrompt> {
        self.find.clone()
    }

    fn prompt_replace(&mut self) -> Option<ReplacePrompt> {
        self.replace.clone()
    }
}

impl Printer for TestShell {
    fn print(&mut self, text: &str) -> Result<(), String> {
        self.printed.push(text.to_string());
        Ok(())
    }
}

impl Shell for TestShell {
    fn clipboard(&mut self) -> &mut dyn TextClipboard {
        &mut self.clipboard
    }

    fn printer(&mut self) -> &mut dyn Printer {
        self
    }
}

fn type_text(session: &mut EditorSession, text: &str) {
    session.document_mut().insert(0, text);
    session.document_mut().commit_edits();
}

#[test]
fn open_edit_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    std::fs::write(&path, "draft one\n").unwrap();

    let mut session = EditorSession::new();
    let mut shell = TestShell {
        open_path: Some(path.clone()),
        ..TestShell::default()
    };

    assert_eq!(
        session.execute(Command::Open, &mut shell).unwrap(),
        Outcome::Opened(path.clone())
    );
    assert_eq!(session.document().text(), "draft one\n");

    let len = session.document().len();
    session.document_mut().insert(len, "draft two\n");
    assert_eq!(
        session.execute(Command::Save, &mut shell).unwrap(),
        Outcome::Saved(path.clone())
    );

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "draft one\ndraft two\n"
    );
}

#[test]
fn save_on_unbound_document_falls_through_to_save_as() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.txt");

    let mut session = EditorSession::new();
    type_text(&mut session, "brand new");

    let mut shell = TestShell {
        save_path: Some(path.clone()),
        ..TestShell::default()
    };
    assert_eq!(
        session.execute(Command::Save, &mut shell).unwrap(),
        Outcome::Saved(path.clone())
    );
    assert_eq!(session.file(), Some(path.as_path()));
}

#[test]
fn cancelled_dialogs_do_nothing() {
    let mut session = EditorSession::new();
    type_text(&mut session, "keep me");
    let mut shell = TestShell::default();

    for command in [Command::Open, Command::SaveAs, Command::Find, Command::Replace] {
        assert_eq!(
            session.execute(command, &mut shell).unwrap(),
            Outcome::Cancelled
        );
    }
    assert_eq!(session.document().text(), "keep me");
    assert_eq!(session.file(), None);
}

#[test]
fn find_then_find_next_until_exhausted() {
    let mut session = EditorSession::new();
    type_text(&mut session, "the cat sat on the mat");

    let mut shell = TestShell {
        find: Some(FindPrompt {
            term: "at".to_string(),
            direction: SearchDirection::Forward,
        }),
        ..TestShell::default()
    };

    match session.execute(Command::Find, &mut shell).unwrap() {
        Outcome::Match(span) => assert_eq!(span.start, 5),
        other => panic!("expected Match, got {:?}", other),
    }
    match session.execute(Command::FindNext, &mut shell).unwrap() {
        Outcome::Match(span) => assert_eq!(span.start, 9),
        other => panic!("expected Match, got {:?}", other),
    }
    match session.execute(Command::FindNext, &mut shell).unwrap() {
        Outcome::Match(span) => assert_eq!(span.start, 20),
        other => panic!("expected Match, got {:?}", other),
    }
    assert!(matches!(
        session.execute(Command::FindNext, &mut shell),
        Err(EditorError::NotFound)
    ));
}

#[test]
fn find_next_before_any_find_is_rejected() {
    let mut session = EditorSession::new();
    type_text(&mut session, "content");
    let mut shell = TestShell::default();

    assert!(matches!(
        session.execute(Command::FindNext, &mut shell),
        Err(EditorError::NoActiveSearch)
    ));
    assert!(matches!(
        session.execute(Command::FindPrevious, &mut shell),
        Err(EditorError::NoActiveSearch)
    ));
}

#[test]
fn replace_dialog_drives_replace_all() {
    let mut session = EditorSession::new();
    type_text(&mut session, "the cat sat");

    let mut shell = TestShell {
        replace: Some(ReplacePrompt {
            find: "at".to_string(),
            replace_with: "XX".to_string(),
        }),
        ..TestShell::default()
    };

    assert_eq!(
        session.execute(Command::Replace, &mut shell).unwrap(),
        Outcome::Replaced(2)
    );
    assert_eq!(session.document().text(), "the cXX sXX");

    // Same dialog input again: nothing left to replace.
    assert!(matches!(
        session.execute(Command::Replace, &mut shell),
        Err(EditorError::NotFound)
    ));
    assert_eq!(session.document().text(), "the cXX sXX");
}

#[test]
fn clipboard_commands_move_text_between_documents() {
    let mut shell = TestShell::default();

    let mut session = EditorSession::new();
    type_text(&mut session, "shared snippet");
    session.document_mut().select(0..6);
    session.execute(Command::Cut, &mut shell).unwrap();
    assert_eq!(session.document().text(), " snippet");

    session.execute(Command::New, &mut shell).unwrap();
    session.execute(Command::Paste, &mut shell).unwrap();
    assert_eq!(session.document().text(), "shared");
}

#[test]
fn undo_redo_commands_round_trip_typing() {
    let mut session = EditorSession::new();
    let mut shell = TestShell::default();

    type_text(&mut session, "first");
    session.document_mut().insert(5, " second");
    session.document_mut().commit_edits();

    session.execute(Command::Undo, &mut shell).unwrap();
    assert_eq!(session.document().text(), "first");
    session.execute(Command::Redo, &mut shell).unwrap();
    assert_eq!(session.document().text(), "first second");

    // Undo with an empty history is simply a no-op.
    session.execute(Command::Undo, &mut shell).unwrap();
    session.execute(Command::Undo, &mut shell).unwrap();
    session.execute(Command::Undo, &mut shell).unwrap();
    assert_eq!(session.document().text(), "");
}

#[test]
fn print_sends_full_document_text() {
    let mut session = EditorSession::new();
    type_text(&mut session, "page body");
    let mut shell = TestShell::default();

    assert_eq!(
        session.execute(Command::Print, &mut shell).unwrap(),
        Outcome::Printed
    );
    assert_eq!(shell.printed, vec!["page body".to_string()]);
}

#[test]
fn errors_leave_the_session_usable() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = EditorSession::new();
    type_text(&mut session, "resilient");

    let mut shell = TestShell {
        open_path: Some(dir.path().join("missing.txt")),
        ..TestShell::default()
    };
    assert!(session.execute(Command::Open, &mut shell).is_err());

    // The failed open changed nothing; normal work continues.
    assert_eq!(session.document().text(), "resilient");
    shell.find = Some(FindPrompt {
        term: "sil".to_string(),
        direction: SearchDirection::Forward,
    });
    assert!(matches!(
        session.execute(Command::Find, &mut shell).unwrap(),
        Outcome::Match(_)
    ));
}
