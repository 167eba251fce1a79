/// Line terminator emitted by a [`StreamSink`](crate::StreamSink) when a line is finished.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LineEnding {
    /// A single line feed (`\n`).
    #[default]
    Lf,
    /// A carriage return followed by a line feed (`\r\n`).
    CrLf,
}

impl LineEnding {
    /// Returns the bytes written for this terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use logstream_sink::LineEnding;
    ///
    /// assert_eq!(LineEnding::Lf.as_bytes(), b"\n");
    /// assert_eq!(LineEnding::CrLf.as_bytes(), b"\r\n");
    /// ```
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
        }
    }

    /// Returns the terminator as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Selects the conventional terminator of the platform the crate was built for.
    ///
    /// Windows targets use [`LineEnding::CrLf`]; everything else uses [`LineEnding::Lf`].
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }
}
