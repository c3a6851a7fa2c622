// Levels are [profane, offensive, sexual, mean].
//
// Entries without a positive level are overrides. Each one spells out a
// common word that contains a listed word in a position where it would
// otherwise be counted.

pub(crate) const DEFAULT_WORDS: &[(&str, [i8; 4])] = &[
    // profanity
    ("fuck", [3, 0, 0, 0]),
    ("fucker", [3, 0, 0, 1]),
    ("motherfucker", [3, 0, 0, 2]),
    ("shit", [2, 0, 0, 0]),
    ("bullshit", [2, 0, 0, 0]),
    ("shithead", [2, 0, 0, 2]),
    ("ass", [1, 0, 0, 0]),
    ("azz", [1, 0, 0, 0]),
    ("asshole", [2, 0, 0, 2]),
    ("dumbass", [1, 0, 0, 1]),
    ("jackass", [1, 0, 0, 1]),
    ("bitch", [2, 0, 0, 2]),
    ("bastard", [2, 0, 0, 1]),
    ("bollocks", [1, 0, 0, 0]),
    ("bugger", [1, 0, 0, 0]),
    ("damn", [1, 0, 0, 0]),
    ("crap", [1, 0, 0, 0]),
    ("piss", [1, 0, 0, 0]),
    ("poop", [1, 0, 0, 0]),
    ("cunt", [3, 1, 1, 1]),
    ("dick", [1, 0, 1, 0]),
    ("cock", [1, 0, 1, 0]),
    ("prick", [1, 0, 1, 1]),
    ("twat", [2, 0, 1, 1]),
    ("wank", [1, 0, 1, 0]),
    // sexual
    ("sex", [0, 0, 1, 0]),
    ("sexy", [0, 0, 1, 0]),
    ("porn", [0, 0, 2, 0]),
    ("penis", [0, 0, 2, 0]),
    ("vagina", [0, 0, 2, 0]),
    ("boob", [0, 0, 1, 0]),
    ("horny", [0, 0, 1, 0]),
    ("slut", [1, 0, 2, 1]),
    ("whore", [1, 0, 2, 1]),
    ("pussy", [1, 0, 2, 0]),
    ("dildo", [0, 0, 2, 0]),
    ("orgasm", [0, 0, 2, 0]),
    ("blowjob", [1, 0, 3, 0]),
    // offensive
    ("retard", [0, 2, 0, 1]),
    ("fag", [1, 3, 0, 1]),
    ("faggot", [2, 3, 0, 2]),
    // mean
    ("dumb", [0, 0, 0, 1]),
    ("stupid", [0, 0, 0, 1]),
    ("idiot", [0, 0, 0, 1]),
    ("moron", [0, 0, 0, 1]),
    ("loser", [0, 0, 0, 1]),
    ("ugly", [0, 0, 0, 1]),
    // overrides
    ("assassin", [-1, 0, 0, 0]),
    ("assemble", [-1, 0, 0, 0]),
    ("assent", [-1, 0, 0, 0]),
    ("assert", [-1, 0, 0, 0]),
    ("assess", [-1, 0, 0, 0]),
    ("asset", [-1, 0, 0, 0]),
    ("assign", [-1, 0, 0, 0]),
    ("assist", [-1, 0, 0, 0]),
    ("associate", [-1, 0, 0, 0]),
    ("assort", [-1, 0, 0, 0]),
    ("assume", [-1, 0, 0, 0]),
    ("assumption", [-1, 0, 0, 0]),
    ("assure", [-1, 0, 0, 0]),
    ("scrap", [-1, 0, 0, 0]),
    ("dickens", [-1, 0, -1, 0]),
    ("peacock", [-1, 0, -1, 0]),
    ("cockpit", [-1, 0, -1, 0]),
    ("cocktail", [-1, 0, -1, 0]),
    ("thorny", [0, 0, -1, 0]),
    ("oxymoron", [0, 0, 0, -1]),
];
