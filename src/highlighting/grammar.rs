//! Token grammar for lexical highlighting of query text

use regex::Regex;

use crate::compile;
use crate::formatting::Syntax;

#[derive(Debug, Clone)]
struct Pattern {
    syntax: Syntax,
    regex: Regex,
    /// A match directly preceded by one of these characters is skipped
    not_after: &'static [char],
}

impl Pattern {
    fn new(syntax: Syntax, regex: &Regex) -> Pattern {
        Pattern {
            syntax,
            regex: regex.clone(),
            not_after: &[],
        }
    }

    /// Split an unclassified piece of text around every match of this
    /// pattern.
    fn split<'t>(&self, piece: &'t str, output: &mut Vec<(Syntax, &'t str)>) {
        let mut last = 0;
        let mut search = 0;

        while let Some(found) = self
            .regex
            .find_at(piece, search)
        {
            let start = found.start();

            let rejected = found.is_empty()
                || piece[..start]
                    .chars()
                    .next_back()
                    .map_or(false, |c| {
                        self.not_after
                            .contains(&c)
                    });

            if rejected {
                match piece[start..]
                    .chars()
                    .next()
                {
                    Some(c) => search = start + c.len_utf8(),
                    None => break,
                }
                continue;
            }

            output.push((Syntax::Neutral, &piece[last..start]));
            output.push((self.syntax, found.as_str()));
            last = found.end();
            search = found.end();
        }

        output.push((Syntax::Neutral, &piece[last..]));
    }
}

/// An ordered list of token patterns. Earlier patterns claim text first;
/// later ones only see what is still unclassified.
#[derive(Debug, Clone)]
pub struct Grammar {
    patterns: Vec<Pattern>,
}

impl Default for Grammar {
    fn default() -> Grammar {
        let string = compile!(r#""(?:\\[\s\S]|[^"\\])*"|'(?:\\[\s\S]|[^'\\])*'"#);
        let variable = compile!(
            r#"@[A-Za-z0-9_.$]+|@"(?:\\[\s\S]|[^"\\])+"|@'(?:\\[\s\S]|[^'\\])+'|@`(?:\\[\s\S]|[^`\\])+`"#
        );
        let boolean = compile!(r"(?i)(?-u:\b)(?:true|false|null)(?-u:\b)");
        let number = compile!(
            r"(?i)(?-u:\b)0x[0-9a-f]+(?-u:\b)|(?-u:\b)[0-9]+\.?[0-9]*|\B\.[0-9]+(?-u:\b)"
        );
        let operator = compile!(
            r"(?i)[-+/=%^~]|&&?|\|\|?|!=?|<(?:=>?|<|>)?|>[>=]?|(?-u:\b)(?:AND|OR|TO|NOT|_exists_)(?-u:\b)"
        );
        let punctuation = compile!(r"[;\[\]{}()`,.]");

        Grammar {
            patterns: vec![
                Pattern {
                    not_after: &['@', '\\'],
                    ..Pattern::new(Syntax::String, string)
                },
                Pattern::new(Syntax::Variable, variable),
                Pattern::new(Syntax::Boolean, boolean),
                Pattern::new(Syntax::Number, number),
                Pattern::new(Syntax::Operator, operator),
                Pattern::new(Syntax::Punctuation, punctuation),
            ],
        }
    }
}

impl Grammar {
    /// Highlight the given words (case insensitively, as whole words) as
    /// keywords, replacing any keywords configured before. An empty list
    /// removes keyword highlighting.
    pub fn with_keywords<S: AsRef<str>>(mut self, keywords: &[S]) -> Result<Grammar, regex::Error> {
        self.patterns
            .retain(|pattern| pattern.syntax != Syntax::Keyword);

        let words: Vec<String> = keywords
            .iter()
            .map(|keyword| keyword.as_ref())
            .filter(|keyword| !keyword.is_empty())
            .map(regex::escape)
            .collect();

        if !words.is_empty() {
            let regex = Regex::new(&format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", words.join("|")))?;
            self.patterns
                .push(Pattern::new(Syntax::Keyword, &regex));
        }

        Ok(self)
    }

    /// Break text into classified fragments. Concatenating the fragments
    /// gives back the original text.
    pub fn classify<'t>(&self, text: &'t str) -> Vec<(Syntax, &'t str)> {
        let mut fragments = vec![(Syntax::Neutral, text)];

        for pattern in &self.patterns {
            let mut result = Vec::with_capacity(fragments.len());
            for (syntax, piece) in fragments {
                match syntax {
                    Syntax::Neutral => pattern.split(piece, &mut result),
                    _ => result.push((syntax, piece)),
                }
            }
            fragments = result;
        }

        fragments.retain(|(_, piece)| !piece.is_empty());
        fragments
    }
}
