use impostor::error::GameError;
use impostor::state::GameSession;
use impostor::types::{Category, GameMode, GamePhase, Language, RoleCard};
use impostor::words::WordSource;

/// End-to-end test for a complete pass-the-phone round.
#[tokio::test]
async fn full_round_flow() {
    let mut session = GameSession::new(WordSource::offline());
    session.set_language(Language::En);

    // 1. Setup: build the roster
    for name in ["Alice", "Bob", "Carol", "Dave", "Eve"] {
        session.add_player(name).unwrap();
    }
    assert_eq!(session.players().len(), 5);
    assert_eq!(session.set_impostor_count(2), 2);

    // 2. Leave setup and pick a mode
    session.begin_mode_select().unwrap();
    assert_eq!(*session.phase(), GamePhase::ModeSelect);

    session
        .start_round(GameMode::Word(Category::Animals))
        .await
        .unwrap();
    assert_eq!(*session.phase(), GamePhase::Distribute);

    let round = session.round().expect("round should exist");
    assert_eq!(round.impostor_ids.len(), 2);
    assert!(!round.secret_word.is_empty());
    assert!(round.starter_index < 5);

    // 3. Pass the device around: everyone peeks, then passes
    let secret = round.secret_word.clone();
    let mut civilians = 0;
    let mut impostors = 0;
    loop {
        let current_is_impostor = {
            let round = session.round().unwrap();
            round.current_player().is_impostor
        };
        match session.peek_current().unwrap() {
            RoleCard::Civilian { word } => {
                assert!(!current_is_impostor);
                assert_eq!(word, secret);
                civilians += 1;
            }
            RoleCard::Impostor { decoy } => {
                assert!(current_is_impostor);
                assert_eq!(decoy, None);
                impostors += 1;
            }
        }
        if *session.advance_reveal().unwrap() == GamePhase::Playing {
            break;
        }
    }
    assert_eq!(civilians, 3);
    assert_eq!(impostors, 2);

    // 4. Discussion ends, roles are revealed
    session.begin_reveal().unwrap();
    assert_eq!(*session.phase(), GamePhase::Reveal);
    assert_eq!(session.used_words().len(), 1);

    // 5. Back to setup for another round
    session.reset_round();
    assert_eq!(*session.phase(), GamePhase::Setup);
    assert!(session.round().is_none());
    assert!(session.players().iter().all(|p| !p.is_impostor));
    // The word just played is still remembered
    assert_eq!(session.used_words().len(), 1);
}

/// A full round where the players supply the words themselves.
#[tokio::test]
async fn full_custom_round_flow() {
    let mut session = GameSession::new(WordSource::offline());
    for name in ["Alice", "Bob", "Carol"] {
        session.add_player(name).unwrap();
    }

    session.begin_mode_select().unwrap();
    session.start_round(GameMode::Custom).await.unwrap();
    assert_eq!(*session.phase(), GamePhase::CustomInput);

    // Words are collected in pass order, one per player
    let words = ["Glacier", "Harbor", "Orchard"];
    for word in words {
        let turn = session.custom_turn().expect("someone should be up");
        assert!(!turn.name.is_empty());
        session.submit_custom_word(word).unwrap();
    }

    // The last submission moves the round to distribution
    assert_eq!(*session.phase(), GamePhase::Distribute);
    let secret = session.round().unwrap().secret_word.clone();
    assert!(words.contains(&secret.as_str()));

    loop {
        session.peek_current().unwrap();
        if *session.advance_reveal().unwrap() == GamePhase::Playing {
            break;
        }
    }
    session.begin_reveal().unwrap();
    assert_eq!(*session.phase(), GamePhase::Reveal);
}

/// The same impostor can never be drawn three rounds in a row.
#[tokio::test]
async fn no_player_is_impostor_three_rounds_running() {
    let mut session = GameSession::new(WordSource::offline());
    for name in ["Alice", "Bob", "Carol"] {
        session.add_player(name).unwrap();
    }

    let mut last_two: Vec<String> = Vec::new();
    for _ in 0..40 {
        session.begin_mode_select().unwrap();
        session
            .start_round(GameMode::Word(Category::Objects))
            .await
            .unwrap();
        let impostor = session.round().unwrap().impostor_ids[0].clone();

        if last_two.len() == 2 {
            assert!(
                !(last_two[0] == impostor && last_two[1] == impostor),
                "impostor repeated three rounds in a row"
            );
            last_two.remove(0);
        }
        last_two.push(impostor);
        session.reset_round();
    }
}

/// Mid-round actions are rejected instead of corrupting state.
#[tokio::test]
async fn out_of_phase_actions_fail_cleanly() {
    let mut session = GameSession::new(WordSource::offline());
    for name in ["Alice", "Bob", "Carol"] {
        session.add_player(name).unwrap();
    }
    session.begin_mode_select().unwrap();
    session
        .start_round(GameMode::Duel(Category::Movies))
        .await
        .unwrap();

    assert_eq!(session.add_player("Mallory"), Err(GameError::InvalidAction));
    assert_eq!(
        session.start_round(GameMode::PlayerHunt).await,
        Err(GameError::InvalidAction)
    );
    assert_eq!(session.begin_reveal(), Err(GameError::InvalidAction));
    assert_eq!(
        session.submit_custom_word("word"),
        Err(GameError::InvalidAction)
    );

    // The duel round itself is intact
    let round = session.round().unwrap();
    assert!(round.secret_word_alt.is_some());
}
