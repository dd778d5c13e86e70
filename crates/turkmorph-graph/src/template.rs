// Suffix template language.
//
// A template spells a morpheme abstractly; the phonetic rule engine turns it
// into letters for a given left context.
//
//   A      two-way harmony vowel (a/e)
//   I      four-way harmony vowel (ı/i/u/ü)
//   +x     optional letter: a consonant appears only after a vowel, a vowel
//          (A or I) only after a consonant
//   >x     consonant that devoices after a voiceless letter (c->ç, d->t)
//   ~x     final consonant that voices when a vowel-initial suffix follows
//   other  literal lowercase letter

use std::fmt;

use turkmorph_core::alphabet;

/// Error in a suffix template, with the char position it was found at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("at position {position}: {reason}")]
pub struct TemplateError {
    pub position: usize,
    pub reason: &'static str,
}

/// A harmony-governed vowel slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyVowel {
    /// `A`: a after back vowels, e after front vowels.
    TwoWay,
    /// `I`: ı, i, u or ü by backness and rounding.
    FourWay,
}

impl HarmonyVowel {
    /// Every letter this slot can be realized as.
    pub fn variants(self) -> &'static [char] {
        match self {
            Self::TwoWay => &['a', 'e'],
            Self::FourWay => &[alphabet::DOTLESS_I, 'i', 'u', alphabet::U_UMLAUT],
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::TwoWay => 'A',
            Self::FourWay => 'I',
        }
    }
}

/// One symbol of a suffix template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Letter(char),
    Harmony(HarmonyVowel),
    AppendConsonant(char),
    AppendVowel(HarmonyVowel),
    Devoicing(char),
    VoicingTail(char),
}

impl Token {
    fn is_optional(self) -> bool {
        matches!(self, Token::AppendConsonant(_) | Token::AppendVowel(_))
    }

    /// Whether this token can be realized as `c`.
    fn may_be(self, c: char) -> bool {
        match self {
            Token::Letter(l) | Token::AppendConsonant(l) => l == c,
            Token::Harmony(v) | Token::AppendVowel(v) => v.variants().contains(&c),
            Token::Devoicing(l) => l == c || alphabet::devoice(l) == Some(c),
            Token::VoicingTail(l) => {
                l == c
                    || alphabet::voice(l, None) == Some(c)
                    || alphabet::voice(l, Some('n')) == Some(c)
            }
        }
    }
}

/// A parsed suffix template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTemplate {
    source: &'static str,
    tokens: Vec<Token>,
}

impl SuffixTemplate {
    /// The template that always produces the empty surface.
    pub const EMPTY: SuffixTemplate = SuffixTemplate {
        source: "",
        tokens: Vec::new(),
    };

    pub fn parse(source: &'static str) -> Result<Self, TemplateError> {
        let chars: Vec<char> = source.chars().collect();
        let mut tokens = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let token = match c {
                'A' => Token::Harmony(HarmonyVowel::TwoWay),
                'I' => Token::Harmony(HarmonyVowel::FourWay),
                '+' | '>' | '~' => {
                    let Some(&next) = chars.get(i + 1) else {
                        return Err(TemplateError {
                            position: i,
                            reason: "modifier at end of template",
                        });
                    };
                    i += 1;
                    modified_token(c, next, i)?
                }
                c if c.is_lowercase() && c.is_alphabetic() => Token::Letter(c),
                _ => {
                    return Err(TemplateError {
                        position: i,
                        reason: "unexpected character",
                    });
                }
            };
            if let Token::VoicingTail(_) = token {
                if i + 1 != chars.len() {
                    return Err(TemplateError {
                        position: i,
                        reason: "voicing tail must be the last symbol",
                    });
                }
            }
            tokens.push(token);
            i += 1;
        }

        Ok(Self { source, tokens })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether the template always produces the empty surface.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether some left context realizes the template as the empty surface.
    pub fn can_be_empty(&self) -> bool {
        self.tokens.iter().all(|t| t.is_optional())
    }

    pub fn has_voicing_tail(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::VoicingTail(_)))
    }

    /// Whether some realization of the template starts with `c`. Lets the
    /// search drop a transition before materializing it.
    pub fn may_start_with(&self, c: char) -> bool {
        for token in &self.tokens {
            if token.may_be(c) {
                return true;
            }
            if !token.is_optional() {
                return false;
            }
        }
        false
    }
}

fn modified_token(modifier: char, c: char, position: usize) -> Result<Token, TemplateError> {
    let err = |reason| Err(TemplateError { position, reason });
    match modifier {
        '+' => match c {
            'A' => Ok(Token::AppendVowel(HarmonyVowel::TwoWay)),
            'I' => Ok(Token::AppendVowel(HarmonyVowel::FourWay)),
            c if alphabet::is_consonant(c) && c.is_lowercase() => Ok(Token::AppendConsonant(c)),
            _ => err("'+' must precede a consonant, A or I"),
        },
        '>' => match alphabet::devoice(c) {
            Some(_) => Ok(Token::Devoicing(c)),
            None => err("'>' must precede a devoicing consonant"),
        },
        _ => match alphabet::voice(c, None) {
            Some(_) => Ok(Token::VoicingTail(c)),
            None => err("'~' must precede a voicing consonant"),
        },
    }
}

impl fmt::Display for SuffixTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            return f.write_str("\u{2205}");
        }
        for token in &self.tokens {
            match *token {
                Token::Letter(c) => write!(f, "{c}")?,
                Token::Harmony(v) => write!(f, "{}", v.symbol())?,
                Token::AppendConsonant(c) => write!(f, "+{c}")?,
                Token::AppendVowel(v) => write!(f, "+{}", v.symbol())?,
                Token::Devoicing(c) => write!(f, ">{c}")?,
                Token::VoicingTail(c) => write!(f, "~{c}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tokens() {
        let t = SuffixTemplate::parse(">cI~k").unwrap();
        assert_eq!(
            t.tokens(),
            &[
                Token::Devoicing('c'),
                Token::Harmony(HarmonyVowel::FourWay),
                Token::VoicingTail('k'),
            ]
        );
        assert!(t.has_voicing_tail());
        assert_eq!(t.to_string(), ">cI~k");

        let t = SuffixTemplate::parse("+yAcA~k").unwrap();
        assert_eq!(t.tokens()[0], Token::AppendConsonant('y'));
        assert_eq!(t.tokens().len(), 5);
    }

    #[test]
    fn parse_turkish_letters() {
        let t = SuffixTemplate::parse("mI\u{015F}").unwrap();
        assert_eq!(t.tokens()[2], Token::Letter(alphabet::S_CEDILLA));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(SuffixTemplate::parse("lA+").unwrap_err().position, 2);
        assert!(SuffixTemplate::parse(">mA").is_err());
        assert!(SuffixTemplate::parse("~kA").is_err());
        assert!(SuffixTemplate::parse("+o").is_err());
        assert!(SuffixTemplate::parse("l-A").is_err());
    }

    #[test]
    fn empty_templates() {
        assert!(SuffixTemplate::EMPTY.is_empty());
        assert!(SuffixTemplate::EMPTY.can_be_empty());
        assert_eq!(SuffixTemplate::EMPTY.to_string(), "\u{2205}");
        let t = SuffixTemplate::parse("+Im").unwrap();
        assert!(!t.is_empty());
        assert!(!t.can_be_empty());
        let t = SuffixTemplate::parse("+I").unwrap();
        assert!(t.can_be_empty());
    }

    #[test]
    fn leading_letters() {
        let dat = SuffixTemplate::parse("+yA").unwrap();
        assert!(dat.may_start_with('y'));
        assert!(dat.may_start_with('a'));
        assert!(dat.may_start_with('e'));
        assert!(!dat.may_start_with('l'));

        let loc = SuffixTemplate::parse(">dA").unwrap();
        assert!(loc.may_start_with('d'));
        assert!(loc.may_start_with('t'));
        assert!(!loc.may_start_with('a'));

        let pl = SuffixTemplate::parse("lAr").unwrap();
        assert!(pl.may_start_with('l'));
        assert!(!pl.may_start_with('a'));

        assert!(!SuffixTemplate::EMPTY.may_start_with('a'));
    }
}
