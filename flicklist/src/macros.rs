#[cfg(feature = "tracing")]
macro_rules! fltrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "flicklist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fltrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fldebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "flicklist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fldebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! flwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "flicklist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! flwarn {
    ($($tt:tt)*) => {};
}
