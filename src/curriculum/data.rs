//! Built-in Jolly Phonics curriculum data.
//!
//! Units are listed in introduction order across the seven pedagogical
//! groups. The clip names match the letter-sound recordings published by
//! Jolly Kingdom; note that "c" and "k" share one clip, and that "oo" and
//! "th" each have two possible pronunciations but a single default clip
//! (moon.mp3 and three.mp3).

/// `(unit, pure sound, clip file name, group)` in introduction order.
pub(super) const BUILTIN: &[(&str, &str, &str, u8)] = &[
    // Group 1
    ("s", "sss", "s.mp3", 1),
    ("a", "aaa", "a.mp3", 1),
    ("t", "ttt", "t.mp3", 1),
    ("i", "iii", "i.mp3", 1),
    ("p", "ppp", "p.mp3", 1),
    ("n", "nnn", "n.mp3", 1),
    // Group 2
    ("c", "ck", "ck.mp3", 2),
    ("k", "ck", "ck.mp3", 2),
    ("e", "eh", "e.mp3", 2),
    ("h", "hhh", "h.mp3", 2),
    ("r", "rrr", "r.mp3", 2),
    ("m", "mmm", "m.mp3", 2),
    ("d", "ddd", "d.mp3", 2),
    // Group 3
    ("g", "ggg", "g.mp3", 3),
    ("o", "oh", "o.mp3", 3),
    ("u", "uh", "u.mp3", 3),
    ("l", "lll", "l.mp3", 3),
    ("f", "fff", "f.mp3", 3),
    ("b", "bbb", "b.mp3", 3),
    // Group 4
    ("ai", "ay", "ai.mp3", 4),
    ("j", "jjj", "j.mp3", 4),
    ("oa", "oh", "oa.mp3", 4),
    ("ie", "eye", "ie.mp3", 4),
    ("ee", "eee", "ee.mp3", 4),
    ("or", "or", "or.mp3", 4),
    // Group 5
    ("z", "zzz", "z.mp3", 5),
    ("w", "wh", "w.mp3", 5),
    ("ng", "ng", "ng.mp3", 5),
    ("v", "vvv", "v.mp3", 5),
    ("oo", "oo", "moon.mp3", 5),
    // Group 6
    ("y", "yyy", "y.mp3", 6),
    ("x", "ks", "x.mp3", 6),
    ("ch", "ch", "ch.mp3", 6),
    ("sh", "sh", "sh.mp3", 6),
    ("th", "th", "three.mp3", 6),
    // Group 7
    ("qu", "kw", "qu.mp3", 7),
    ("ou", "ow", "ou.mp3", 7),
    ("oi", "oy", "oi.mp3", 7),
    ("ue", "yoo", "ue.mp3", 7),
    ("er", "er", "er.mp3", 7),
    ("ar", "ar", "ar.mp3", 7),
];
