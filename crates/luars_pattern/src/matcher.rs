// Backtracking bytecode interpreter
//
// `Split` pushes its second target onto a backtrack stack and continues at
// the first. A failing thread pops the most recent alternative, so
// alternatives are explored depth-first in bytecode order. Capture writes
// made after an alternative was pushed are rolled back from an undo log
// before it resumes.

use crate::compiler::{Instruction, Program};
use crate::error::MatchError;
use crate::match_info::{MatchInfo, MatchSpan};
use crate::match_option::{MatchOption, ResumeMode};

/// Byte offset map: ASCII identity (c2b[i]=i) or precomputed map
enum ByteMap {
    Ascii,
    Map(Vec<usize>),
}

impl ByteMap {
    #[inline(always)]
    fn get(&self, i: usize) -> usize {
        match self {
            ByteMap::Ascii => i,
            ByteMap::Map(m) => m[i],
        }
    }
}

/// A subject string split into chars, remembering where each char starts.
pub struct Subject {
    chars: Vec<char>,
    bytes: ByteMap,
}

impl Subject {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let bytes = if text.is_ascii() {
            ByteMap::Ascii
        } else {
            // len+1 entries: the last one is text.len(), the end position
            ByteMap::Map(
                text.char_indices()
                    .map(|(i, _)| i)
                    .chain(std::iter::once(text.len()))
                    .collect(),
            )
        };
        Subject { chars, bytes }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn byte_offset(&self, ci: usize) -> usize {
        self.bytes.get(ci)
    }

    /// Char index of the first char starting at or after byte offset `byte`.
    pub fn char_index(&self, byte: usize) -> usize {
        match &self.bytes {
            ByteMap::Ascii => byte.min(self.chars.len()),
            ByteMap::Map(m) => m.partition_point(|&b| b < byte).min(self.chars.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CaptureSlot {
    start: Option<usize>,
    end: Option<usize>,
}

/// A pending alternative: resume at `pc` with the cursor at `si`, after
/// undoing capture writes past `mark`.
#[derive(Debug, Clone, Copy)]
struct Backtrack {
    pc: usize,
    si: usize,
    mark: usize,
}

/// Per-search scratch state. Never shared: a `Program` stays immutable.
pub struct MatchState<'p, 's> {
    program: &'p Program,
    text: &'s [char],
    captures: Vec<CaptureSlot>,
    undo_log: Vec<(usize, CaptureSlot)>,
    backtrack: Vec<Backtrack>,
    max_backtrack: usize,
}

impl<'p, 's> MatchState<'p, 's> {
    pub fn new(program: &'p Program, text: &'s [char], max_backtrack: usize) -> Self {
        MatchState {
            program,
            text,
            captures: vec![CaptureSlot::default(); program.captures],
            undo_log: Vec::new(),
            backtrack: Vec::new(),
            max_backtrack,
        }
    }

    /// Clear capture slots and pending alternatives before a new attempt.
    #[inline]
    pub fn reset(&mut self) {
        self.captures.fill(CaptureSlot::default());
        self.undo_log.clear();
        self.backtrack.clear();
    }

    /// Run the program from instruction 0 with the subject cursor at `si`.
    /// Returns the char index where the match ends.
    pub fn try_at(&mut self, si: usize) -> Result<Option<usize>, MatchError> {
        self.reset();
        self.exec(si)
    }

    fn exec(&mut self, mut si: usize) -> Result<Option<usize>, MatchError> {
        let program = self.program;
        let text = self.text;
        let mut pc = 0;

        loop {
            let failed = match &program.code[pc] {
                Instruction::Char(c) => {
                    let ok = si < text.len() && text[si] == *c;
                    if ok {
                        si += 1;
                        pc += 1;
                    }
                    !ok
                }
                Instruction::Class(class) => {
                    let ok = si < text.len() && class.matches(text[si]);
                    if ok {
                        si += 1;
                        pc += 1;
                    }
                    !ok
                }
                Instruction::Accept => {
                    if !program.tail_anchored || si == text.len() {
                        return Ok(Some(si));
                    }
                    true
                }
                Instruction::CaptureStart(slot) => {
                    self.record(*slot, CaptureSlot {
                        start: Some(si),
                        end: None,
                    });
                    pc += 1;
                    false
                }
                Instruction::CaptureEnd(slot) => {
                    let start = self.captures[*slot].start;
                    self.record(*slot, CaptureSlot {
                        start,
                        end: Some(si),
                    });
                    pc += 1;
                    false
                }
                Instruction::Split(x, y) => {
                    if self.backtrack.len() >= self.max_backtrack {
                        return Err(MatchError::BacktrackLimit(self.max_backtrack));
                    }
                    self.backtrack.push(Backtrack {
                        pc: *y,
                        si,
                        mark: self.undo_log.len(),
                    });
                    pc = *x;
                    false
                }
                Instruction::Jump(x) => {
                    pc = *x;
                    false
                }
            };

            if failed {
                let Some(alt) = self.backtrack.pop() else {
                    return Ok(None);
                };
                self.rollback(alt.mark);
                pc = alt.pc;
                si = alt.si;
            }
        }
    }

    #[inline]
    fn record(&mut self, slot: usize, value: CaptureSlot) {
        self.undo_log.push((slot, self.captures[slot]));
        self.captures[slot] = value;
    }

    fn rollback(&mut self, mark: usize) {
        while self.undo_log.len() > mark {
            if let Some((slot, old)) = self.undo_log.pop() {
                self.captures[slot] = old;
            }
        }
    }

    fn info(&self, subject: &Subject, start: usize, end: usize) -> MatchInfo {
        let captures = self
            .captures
            .iter()
            .map(|cap| match (cap.start, cap.end) {
                (Some(s), Some(e)) if s <= e => Some(MatchSpan::new(
                    subject.byte_offset(s),
                    subject.byte_offset(e),
                )),
                _ => None,
            })
            .collect();
        MatchInfo {
            span: MatchSpan::new(subject.byte_offset(start), subject.byte_offset(end)),
            captures,
        }
    }

    fn attempt(&mut self, si: usize) -> Result<Option<usize>, MatchError> {
        self.try_at(si).inspect_err(|e| {
            log::warn!("pattern search abandoned at offset {}: {}", si, e);
        })
    }
}

/// First match starting at char index `init` or later.
pub fn find_at(
    program: &Program,
    subject: &Subject,
    init: usize,
    option: &MatchOption,
) -> Result<Option<MatchInfo>, MatchError> {
    let mut ms = MatchState::new(program, &subject.chars, option.max_backtrack);
    let mut si = init;
    while si <= subject.len() {
        if let Some(end) = ms.attempt(si)? {
            log::trace!("match at {}..{}", si, end);
            return Ok(Some(ms.info(subject, si, end)));
        }
        if program.head_anchored {
            break;
        }
        si += 1;
    }
    Ok(None)
}

/// Every match in order. `limit` of `None` or `Some(0)` means no limit.
/// Running out of backtrack space fails the whole search; no partial list
/// is returned.
pub fn find_all(
    program: &Program,
    subject: &Subject,
    limit: Option<usize>,
    option: &MatchOption,
) -> Result<Vec<MatchInfo>, MatchError> {
    let limit = limit.filter(|&n| n > 0);
    let mut matches = Vec::new();
    let mut ms = MatchState::new(program, &subject.chars, option.max_backtrack);
    let mut si = 0;
    let mut last_end = None;

    while si <= subject.len() {
        if let Some(max) = limit
            && matches.len() >= max
        {
            break;
        }

        match ms.attempt(si)? {
            Some(end) if last_end != Some(end) => {
                log::trace!("match at {}..{}", si, end);
                matches.push(ms.info(subject, si, end));
                last_end = Some(end);
                si = match option.resume {
                    ResumeMode::MatchEnd => end,
                    ResumeMode::SkipOne => end + 1,
                };
            }
            _ => si += 1,
        }

        if program.head_anchored {
            break;
        }
    }

    Ok(matches)
}
