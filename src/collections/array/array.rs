use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// A heap allocated buffer of exactly `size` elements, sized at runtime. Similar to a
/// [`Box<[T]>`](Box<T>), except that an `Array<MaybeUninit<T>>` can be reallocated in place.
///
/// This is the storage primitive underneath the array sequence and the bucket table of the hash
/// table. It never over-allocates: the allocation always holds exactly `size` elements.
pub(crate) struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates a new Array with size 0. Nothing is allocated.
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, or returns an [`Err`] if
    /// the memory layout size would exceed [`isize::MAX`].
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, CapacityOverflow> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// The layout of the current allocation.
    fn current_layout(&self) -> Layout {
        // SAFETY: The same layout was produced by Layout::array when the current allocation was
        // made, so the size can't overflow and the alignment is that of T.
        unsafe {
            Layout::from_size_align_unchecked(size_of::<T>() * self.size, align_of::<T>())
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: The layout of count elements is valid and i is within the allocated range of
            // the Array.
            unsafe {
                arr.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // SAFETY: All values are initialized with the default value for T.
        unsafe { arr.assume_init() }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let result = Array {
            ptr: self.ptr.cast(),
            size: self.size,
            _phantom: PhantomData,
        };
        mem::forget(self);
        result
    }

    /// Reallocates the Array to hold exactly `new_size` elements. Existing elements up to the
    /// smaller of the two sizes are preserved, new locations are uninitialized and elements past
    /// `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    pub fn realloc(&mut self, new_size: usize) {
        self.try_realloc(new_size).throw()
    }

    /// Reallocates the Array to hold exactly `new_size` elements, or returns an [`Err`] without
    /// touching the allocation if the new layout would exceed [`isize::MAX`] bytes.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), CapacityOverflow> {
        let new_layout = Self::make_layout(new_size)?;

        if size_of::<T>() == 0 || self.size == new_size {
            // Zero-sized types are never allocated, only the size needs to change.
            self.size = new_size;
            return Ok(());
        }

        let old_layout = self.current_layout();

        let new_ptr = match (self.size, new_size) {
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size because both zero sizes and zero-sized types are guarded against.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, _) => {
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size elements are initialized and are never used again.
        unsafe { ptr::drop_in_place(self.deref_mut() as *mut [T]) }

        let layout = self.current_layout();
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements, all of which are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the borrow checker prevents other access throughout the
        // lifetime of the returned slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}
