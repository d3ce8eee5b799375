fn is_consonant(word: &[char], i: usize) -> bool {
    match word[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, the `m` in `[C](VC)^m[V]`.
fn measure(word: &[char]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;

    for i in 0..word.len() {
        let vowel = !is_consonant(word, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }

    m
}

fn has_vowel(word: &[char]) -> bool {
    (0..word.len()).any(|i| !is_consonant(word, i))
}

fn ends_with_double_consonant(word: &[char]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

fn ends_with_cvc(word: &[char]) -> bool {
    let n = word.len();
    if n < 3 {
        return false;
    }
    is_consonant(word, n - 3)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word[n - 1], 'w' | 'x' | 'y')
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let n = suffix.chars().count();
    word.len() >= n && word[word.len() - n..].iter().copied().eq(suffix.chars())
}

/// Stem left after removing `suffix`; caller checks `ends_with` first.
fn stem_len(word: &[char], suffix: &str) -> usize {
    word.len() - suffix.chars().count()
}

fn set_suffix(word: &mut Vec<char>, suffix: &str, replacement: &str) {
    let len = stem_len(word, suffix);
    word.truncate(len);
    word.extend(replacement.chars());
}

/// Finds the first matching suffix in `rules` and rewrites it when the stem
/// satisfies `condition`. Only the first match is considered.
fn apply_rules<F>(word: &mut Vec<char>, rules: &[(&str, &str)], condition: F)
where
    F: Fn(&[char]) -> bool,
{
    if let Some(&(suffix, replacement)) = rules.iter().find(|(s, _)| ends_with(word, s)) {
        let len = stem_len(word, suffix);
        if condition(&word[..len]) {
            set_suffix(word, suffix, replacement);
        }
    }
}

fn step_1a(word: &mut Vec<char>) {
    if ends_with(word, "sses") {
        set_suffix(word, "sses", "ss");
    } else if ends_with(word, "ies") {
        set_suffix(word, "ies", "i");
    } else if ends_with(word, "s") && !ends_with(word, "ss") {
        word.pop();
    }
}

fn step_1b(word: &mut Vec<char>) {
    if ends_with(word, "eed") {
        if measure(&word[..stem_len(word, "eed")]) > 0 {
            set_suffix(word, "eed", "ee");
        }
        return;
    }

    let removed = ["ed", "ing"].into_iter().any(|suffix| {
        if ends_with(word, suffix) && has_vowel(&word[..stem_len(word, suffix)]) {
            set_suffix(word, suffix, "");
            true
        } else {
            false
        }
    });
    if !removed {
        return;
    }

    if ends_with(word, "at") || ends_with(word, "bl") || ends_with(word, "iz") {
        word.push('e');
    } else if ends_with_double_consonant(word) && !matches!(word[word.len() - 1], 'l' | 's' | 'z') {
        word.pop();
    } else if measure(word) == 1 && ends_with_cvc(word) {
        word.push('e');
    }
}

fn step_1c(word: &mut Vec<char>) {
    if ends_with(word, "y") && has_vowel(&word[..word.len() - 1]) {
        word.pop();
        word.push('i');
    }
}

fn step_2(word: &mut Vec<char>) {
    const RULES: &[(&str, &str)] = &[
        ("ational", "ate"), ("tional", "tion"), ("enci", "ence"), ("anci", "ance"),
        ("izer", "ize"), ("abli", "able"), ("alli", "al"), ("entli", "ent"),
        ("eli", "e"), ("ousli", "ous"), ("ization", "ize"), ("ation", "ate"),
        ("ator", "ate"), ("alism", "al"), ("iveness", "ive"), ("fulness", "ful"),
        ("ousness", "ous"), ("aliti", "al"), ("iviti", "ive"), ("biliti", "ble"),
    ];
    apply_rules(word, RULES, |stem| measure(stem) > 0);
}

fn step_3(word: &mut Vec<char>) {
    const RULES: &[(&str, &str)] = &[
        ("icate", "ic"), ("ative", ""), ("alize", "al"), ("iciti", "ic"),
        ("ical", "ic"), ("ful", ""), ("ness", ""),
    ];
    apply_rules(word, RULES, |stem| measure(stem) > 0);
}

fn step_4(word: &mut Vec<char>) {
    const RULES: &[(&str, &str)] = &[
        ("al", ""), ("ance", ""), ("ence", ""), ("er", ""), ("ic", ""),
        ("able", ""), ("ible", ""), ("ant", ""), ("ement", ""), ("ment", ""),
        ("ent", ""), ("ion", ""), ("ou", ""), ("ism", ""), ("ate", ""),
        ("iti", ""), ("ous", ""), ("ive", ""), ("ize", ""),
    ];
    let ion = ends_with(word, "ion");
    apply_rules(word, RULES, |stem| {
        let st = stem.last().is_some_and(|&c| matches!(c, 's' | 't'));
        measure(stem) > 1 && (!ion || st)
    });
}

fn step_5a(word: &mut Vec<char>) {
    if ends_with(word, "e") {
        let stem = &word[..word.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_with_cvc(stem)) {
            word.pop();
        }
    }
}

fn step_5b(word: &mut Vec<char>) {
    if measure(word) > 1 && ends_with_double_consonant(word) && ends_with(word, "l") {
        word.pop();
    }
}

/// Porter stem of a single lowercase token. Words of two letters or fewer
/// are returned unchanged.
pub fn porter_stem(token: &str) -> String {
    let mut word: Vec<char> = token.to_lowercase().chars().collect();

    if word.len() <= 2 {
        return word.into_iter().collect();
    }

    step_1a(&mut word);
    step_1b(&mut word);
    step_1c(&mut word);
    step_2(&mut word);
    step_3(&mut word);
    step_4(&mut word);
    step_5a(&mut word);
    step_5b(&mut word);

    word.into_iter().collect()
}
