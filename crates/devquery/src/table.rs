//! The parameter registry: every known device information parameter, sorted by name.

use crate::{InfoFormat, ParamInfo};
use device_transport::ids;

/// Registry rows in ascending case-insensitive name order.
///
/// Name lookups binary-search this table, so new rows must keep the order.
pub static INFO_MAP: &[ParamInfo] = &[
    ParamInfo {
        name: "address_bits",
        id: ids::DEVICE_ADDRESS_BITS,
        description: "Address space size in bits",
        format: InfoFormat::Uint,
        unit: "bits",
    },
    ParamInfo {
        name: "available",
        id: ids::DEVICE_AVAILABLE,
        description: "Is device available",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "board_name_amd",
        id: ids::DEVICE_BOARD_NAME_AMD,
        description: "Name of the GPU board and model of the specific device",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "built_in_kernels",
        id: ids::DEVICE_BUILT_IN_KERNELS,
        description: "Device built-in kernels",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "compiler_available",
        id: ids::DEVICE_COMPILER_AVAILABLE,
        description: "Is a compiler available for device",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "compute_capability_major_nv",
        id: ids::DEVICE_COMPUTE_CAPABILITY_MAJOR_NV,
        description: "Major revision number that defines the CUDA compute capability of the device",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "compute_capability_minor_nv",
        id: ids::DEVICE_COMPUTE_CAPABILITY_MINOR_NV,
        description: "Minor revision number that defines the CUDA compute capability of the device",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "double_fp_config",
        id: ids::DEVICE_DOUBLE_FP_CONFIG,
        description: "Floating-point device configuration (double)",
        format: InfoFormat::FpConfig,
        unit: "",
    },
    ParamInfo {
        name: "driver_version",
        id: ids::DRIVER_VERSION,
        description: "Driver version",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "endian_little",
        id: ids::DEVICE_ENDIAN_LITTLE,
        description: "Is device little endian",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "error_correction_support",
        id: ids::DEVICE_ERROR_CORRECTION_SUPPORT,
        description: "Error correction support",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "execution_capabilities",
        id: ids::DEVICE_EXECUTION_CAPABILITIES,
        description: "Execution capabilities",
        format: InfoFormat::ExecCapabilities,
        unit: "",
    },
    ParamInfo {
        name: "extensions",
        id: ids::DEVICE_EXTENSIONS,
        description: "Extensions",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "global_free_memory_amd",
        id: ids::DEVICE_GLOBAL_FREE_MEMORY_AMD,
        description: "Free device memory",
        format: InfoFormat::UlongBytes,
        unit: "",
    },
    ParamInfo {
        name: "global_mem_cache_size",
        id: ids::DEVICE_GLOBAL_MEM_CACHE_SIZE,
        description: "Global mem. cache size",
        format: InfoFormat::UlongBytes,
        unit: "",
    },
    ParamInfo {
        name: "global_mem_cache_type",
        id: ids::DEVICE_GLOBAL_MEM_CACHE_TYPE,
        description: "Global mem. cache type",
        format: InfoFormat::CacheType,
        unit: "",
    },
    ParamInfo {
        name: "global_mem_cacheline_size",
        id: ids::DEVICE_GLOBAL_MEM_CACHELINE_SIZE,
        description: "Global mem. cache line size",
        format: InfoFormat::UintBytes,
        unit: "",
    },
    ParamInfo {
        name: "global_mem_channel_bank_width_amd",
        id: ids::DEVICE_GLOBAL_MEM_CHANNEL_BANK_WIDTH_AMD,
        description: "Global mem. channel bank width",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "global_mem_channel_banks_amd",
        id: ids::DEVICE_GLOBAL_MEM_CHANNEL_BANKS_AMD,
        description: "Global mem. channel banks",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "global_mem_channels_amd",
        id: ids::DEVICE_GLOBAL_MEM_CHANNELS_AMD,
        description: "Global mem. channels",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "global_mem_size",
        id: ids::DEVICE_GLOBAL_MEM_SIZE,
        description: "Global mem. size",
        format: InfoFormat::UlongBytes,
        unit: "",
    },
    ParamInfo {
        name: "gpu_overlap_nv",
        id: ids::DEVICE_GPU_OVERLAP_NV,
        description: "Can device concurrently copy memory between host and device while executing a kernel",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "half_fp_config",
        id: ids::DEVICE_HALF_FP_CONFIG,
        description: "Floating-point device configuration (half)",
        format: InfoFormat::FpConfig,
        unit: "",
    },
    ParamInfo {
        name: "host_unified_memory",
        id: ids::DEVICE_HOST_UNIFIED_MEMORY,
        description: "Host unified memory subsystem",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "image2d_max_height",
        id: ids::DEVICE_IMAGE2D_MAX_HEIGHT,
        description: "Max. height of 2D image (pixels)",
        format: InfoFormat::SizeT,
        unit: "px",
    },
    ParamInfo {
        name: "image2d_max_width",
        id: ids::DEVICE_IMAGE2D_MAX_WIDTH,
        description: "Max. width of 1D/2D image (pixels)",
        format: InfoFormat::SizeT,
        unit: "px",
    },
    ParamInfo {
        name: "image3d_max_depth",
        id: ids::DEVICE_IMAGE3D_MAX_DEPTH,
        description: "Max. depth of 3D image (pixels)",
        format: InfoFormat::SizeT,
        unit: "px",
    },
    ParamInfo {
        name: "image3d_max_height",
        id: ids::DEVICE_IMAGE3D_MAX_HEIGHT,
        description: "Max. height of 3D image (pixels)",
        format: InfoFormat::SizeT,
        unit: "px",
    },
    ParamInfo {
        name: "image3d_max_width",
        id: ids::DEVICE_IMAGE3D_MAX_WIDTH,
        description: "Max. width of 3D image (pixels)",
        format: InfoFormat::SizeT,
        unit: "px",
    },
    ParamInfo {
        name: "image_max_array_size",
        id: ids::DEVICE_IMAGE_MAX_ARRAY_SIZE,
        description: "Max. images in a 1D or 2D image array",
        format: InfoFormat::SizeT,
        unit: "images",
    },
    ParamInfo {
        name: "image_max_buffer_size",
        id: ids::DEVICE_IMAGE_MAX_BUFFER_SIZE,
        description: "Max. pixels for 1D image from buffer object",
        format: InfoFormat::SizeT,
        unit: "px",
    },
    ParamInfo {
        name: "image_support",
        id: ids::DEVICE_IMAGE_SUPPORT,
        description: "Image support",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "integrated_memory_nv",
        id: ids::DEVICE_INTEGRATED_MEMORY_NV,
        description: "Is device integrated with the memory subsystem?",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "kernel_exec_timeout_nv",
        id: ids::DEVICE_KERNEL_EXEC_TIMEOUT_NV,
        description: "Is there a limit for kernels executed on device?",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "linker_available",
        id: ids::DEVICE_LINKER_AVAILABLE,
        description: "Linker available",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "local_mem_banks_amd",
        id: ids::DEVICE_LOCAL_MEM_BANKS_AMD,
        description: "Local mem. banks",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "local_mem_size",
        id: ids::DEVICE_LOCAL_MEM_SIZE,
        description: "Local mem. size",
        format: InfoFormat::UlongBytes,
        unit: "",
    },
    ParamInfo {
        name: "local_mem_size_per_compute_unit_amd",
        id: ids::DEVICE_LOCAL_MEM_SIZE_PER_COMPUTE_UNIT_AMD,
        description: "Local mem. size per compute unit",
        format: InfoFormat::UintBytes,
        unit: "",
    },
    ParamInfo {
        name: "local_mem_type",
        id: ids::DEVICE_LOCAL_MEM_TYPE,
        description: "Local mem. type",
        format: InfoFormat::LocalMemType,
        unit: "",
    },
    ParamInfo {
        name: "max_atomic_counters_ext",
        id: ids::DEVICE_MAX_ATOMIC_COUNTERS_EXT,
        description: "Max. atomic counters",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "max_clock_frequency",
        id: ids::DEVICE_MAX_CLOCK_FREQUENCY,
        description: "Max. clock frequency (MHz)",
        format: InfoFormat::Uint,
        unit: "MHz",
    },
    ParamInfo {
        name: "max_compute_units",
        id: ids::DEVICE_MAX_COMPUTE_UNITS,
        description: "Number of compute units in device",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "max_constant_args",
        id: ids::DEVICE_MAX_CONSTANT_ARGS,
        description: "Max. number of __constant args in kernel",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "max_constant_buffer_size",
        id: ids::DEVICE_MAX_CONSTANT_BUFFER_SIZE,
        description: "Max. size in bytes of a constant buffer allocation",
        format: InfoFormat::UlongBytes,
        unit: "",
    },
    ParamInfo {
        name: "max_mem_alloc_size",
        id: ids::DEVICE_MAX_MEM_ALLOC_SIZE,
        description: "Max. size of memory object allocation in bytes",
        format: InfoFormat::UlongBytes,
        unit: "",
    },
    ParamInfo {
        name: "max_parameter_size",
        id: ids::DEVICE_MAX_PARAMETER_SIZE,
        description: "Max. size in bytes of the arguments that can be passed to a kernel",
        format: InfoFormat::SizeTBytes,
        unit: "",
    },
    ParamInfo {
        name: "max_read_image_args",
        id: ids::DEVICE_MAX_READ_IMAGE_ARGS,
        description: "Max. number of simultaneous image objects that can be read by a kernel",
        format: InfoFormat::Uint,
        unit: "images",
    },
    ParamInfo {
        name: "max_samplers",
        id: ids::DEVICE_MAX_SAMPLERS,
        description: "Max. samplers that can be used in kernel",
        format: InfoFormat::Uint,
        unit: "samplers",
    },
    ParamInfo {
        name: "max_work_group_size",
        id: ids::DEVICE_MAX_WORK_GROUP_SIZE,
        description: "Max. work-items in work-group executing a kernel on a single compute unit, using the data parallel execution model",
        format: InfoFormat::SizeT,
        unit: "work-items",
    },
    ParamInfo {
        name: "max_work_item_dimensions",
        id: ids::DEVICE_MAX_WORK_ITEM_DIMENSIONS,
        description: "Max. dims that specify the global and local work-item IDs used by the data parallel execution model",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "max_work_item_sizes",
        id: ids::DEVICE_MAX_WORK_ITEM_SIZES,
        description: "Max. work-items in each dimension of work-group",
        format: InfoFormat::SizeTVec,
        unit: "",
    },
    ParamInfo {
        name: "max_write_image_args",
        id: ids::DEVICE_MAX_WRITE_IMAGE_ARGS,
        description: "Max. simultaneous image objects that can be written to by a kernel",
        format: InfoFormat::Uint,
        unit: "images",
    },
    ParamInfo {
        name: "mem_base_addr_align",
        id: ids::DEVICE_MEM_BASE_ADDR_ALIGN,
        description: "Size in bits of the largest OpenCL built-in data type supported by the device",
        format: InfoFormat::Uint,
        unit: "bits",
    },
    ParamInfo {
        name: "min_data_type_align_size",
        id: ids::DEVICE_MIN_DATA_TYPE_ALIGN_SIZE,
        description: "Smallest alignment which can be used for any data type (deprecated in OpenCL 1.2)",
        format: InfoFormat::UintBytes,
        unit: "",
    },
    ParamInfo {
        name: "name",
        id: ids::DEVICE_NAME,
        description: "Name of device",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "native_vector_width_char",
        id: ids::DEVICE_NATIVE_VECTOR_WIDTH_CHAR,
        description: "Native ISA char vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "native_vector_width_double",
        id: ids::DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE,
        description: "Native ISA double vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "native_vector_width_float",
        id: ids::DEVICE_NATIVE_VECTOR_WIDTH_FLOAT,
        description: "Native ISA float vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "native_vector_width_half",
        id: ids::DEVICE_NATIVE_VECTOR_WIDTH_HALF,
        description: "Native ISA half vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "native_vector_width_int",
        id: ids::DEVICE_NATIVE_VECTOR_WIDTH_INT,
        description: "Native ISA int vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "native_vector_width_long",
        id: ids::DEVICE_NATIVE_VECTOR_WIDTH_LONG,
        description: "Native ISA long vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "native_vector_width_short",
        id: ids::DEVICE_NATIVE_VECTOR_WIDTH_SHORT,
        description: "Native ISA short vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "opencl_c_version",
        id: ids::DEVICE_OPENCL_C_VERSION,
        description: "Highest OpenCL C version supported by the device compiler",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "parent_device",
        id: ids::DEVICE_PARENT_DEVICE,
        description: "The cl_device_id of the parent device to which the sub-device belongs",
        format: InfoFormat::Ptr,
        unit: "",
    },
    ParamInfo {
        name: "partition_affinity_domain",
        id: ids::DEVICE_PARTITION_AFFINITY_DOMAIN,
        description: "Supported affinity domains for partitioning the device using CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN",
        format: InfoFormat::AffinityDomain,
        unit: "",
    },
    ParamInfo {
        name: "partition_max_sub_devices",
        id: ids::DEVICE_PARTITION_MAX_SUB_DEVICES,
        description: "Max. sub-devices that can be created when device is partitioned",
        format: InfoFormat::Uint,
        unit: "devices",
    },
    ParamInfo {
        name: "partition_properties",
        id: ids::DEVICE_PARTITION_PROPERTIES,
        description: "Partition types supported by device",
        format: InfoFormat::PartitionProperties,
        unit: "",
    },
    ParamInfo {
        name: "partition_type",
        id: ids::DEVICE_PARTITION_TYPE,
        description: "Properties specified in clCreateSubDevices if device is a subdevice",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "platform",
        id: ids::DEVICE_PLATFORM,
        description: "The platform associated with device",
        format: InfoFormat::Ptr,
        unit: "",
    },
    ParamInfo {
        name: "preferred_interop_user_sync",
        id: ids::DEVICE_PREFERRED_INTEROP_USER_SYNC,
        description: "'Yes' if device prefers user to be responsible for sync. when sharing memory objects between OpenCL and other APIs, 'No' if device has a performant path for performing such sync.",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "preferred_vector_width_char",
        id: ids::DEVICE_PREFERRED_VECTOR_WIDTH_CHAR,
        description: "Preferred ISA char vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "preferred_vector_width_double",
        id: ids::DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE,
        description: "Preferred ISA double vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "preferred_vector_width_float",
        id: ids::DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT,
        description: "Preferred ISA float vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "preferred_vector_width_half",
        id: ids::DEVICE_PREFERRED_VECTOR_WIDTH_HALF,
        description: "Preferred ISA half vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "preferred_vector_width_int",
        id: ids::DEVICE_PREFERRED_VECTOR_WIDTH_INT,
        description: "Preferred ISA int vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "preferred_vector_width_long",
        id: ids::DEVICE_PREFERRED_VECTOR_WIDTH_LONG,
        description: "Preferred ISA long vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "preferred_vector_width_short",
        id: ids::DEVICE_PREFERRED_VECTOR_WIDTH_SHORT,
        description: "Preferred ISA short vector width (number of scalar elements that can be stored in the vector)",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "printf_buffer_size",
        id: ids::DEVICE_PRINTF_BUFFER_SIZE,
        description: "Max. size of internal buffer that holds the output of printf calls from kernel",
        format: InfoFormat::SizeTBytes,
        unit: "",
    },
    ParamInfo {
        name: "profile",
        id: ids::DEVICE_PROFILE,
        description: "Profile name supported by the device (FULL or EMBEDDED)",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "profiling_timer_offset_amd",
        id: ids::DEVICE_PROFILING_TIMER_OFFSET_AMD,
        description: "Offset between event timestamps in nanoseconds",
        format: InfoFormat::SizeT,
        unit: "ns",
    },
    ParamInfo {
        name: "profiling_timer_resolution",
        id: ids::DEVICE_PROFILING_TIMER_RESOLUTION,
        description: "Resolution of device timer in nanoseconds",
        format: InfoFormat::SizeT,
        unit: "ns",
    },
    ParamInfo {
        name: "queue_properties",
        id: ids::DEVICE_QUEUE_PROPERTIES,
        description: "Command-queue properties supported by device",
        format: InfoFormat::QueueProperties,
        unit: "",
    },
    ParamInfo {
        name: "reference_count",
        id: ids::DEVICE_REFERENCE_COUNT,
        description: "Device reference count",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "registers_per_block_nv",
        id: ids::DEVICE_REGISTERS_PER_BLOCK_NV,
        description: "Maximum number of 32-bit registers available to a work-group",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "simd_instruction_width_amd",
        id: ids::DEVICE_SIMD_INSTRUCTION_WIDTH_AMD,
        description: "SIMD instruction width",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "simd_per_compute_unit_amd",
        id: ids::DEVICE_SIMD_PER_COMPUTE_UNIT_AMD,
        description: "SIMD per compute unit",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "simd_width_amd",
        id: ids::DEVICE_SIMD_WIDTH_AMD,
        description: "SIMD width",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "single_fp_config",
        id: ids::DEVICE_SINGLE_FP_CONFIG,
        description: "Floating-point device configuration (single)",
        format: InfoFormat::FpConfig,
        unit: "",
    },
    ParamInfo {
        name: "thread_trace_supported_amd",
        id: ids::DEVICE_THREAD_TRACE_SUPPORTED_AMD,
        description: "Is thread trace supported",
        format: InfoFormat::YesNo,
        unit: "",
    },
    ParamInfo {
        name: "topology_amd",
        id: ids::DEVICE_TOPOLOGY_AMD,
        description: "Description of the topology used to connect the device to the host",
        format: InfoFormat::Hex,
        unit: "",
    },
    ParamInfo {
        name: "type",
        id: ids::DEVICE_TYPE,
        description: "Type of OpenCL device",
        format: InfoFormat::DeviceType,
        unit: "",
    },
    ParamInfo {
        name: "vendor",
        id: ids::DEVICE_VENDOR,
        description: "Vendor of OpenCL device",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "vendor_id",
        id: ids::DEVICE_VENDOR_ID,
        description: "Unique device vendor identifier",
        format: InfoFormat::Hex,
        unit: "",
    },
    ParamInfo {
        name: "version",
        id: ids::DEVICE_VERSION,
        description: "OpenCL software driver version",
        format: InfoFormat::Char,
        unit: "",
    },
    ParamInfo {
        name: "warp_size_nv",
        id: ids::DEVICE_WARP_SIZE_NV,
        description: "Warp size in work-items",
        format: InfoFormat::Uint,
        unit: "",
    },
    ParamInfo {
        name: "wavefront_width_amd",
        id: ids::DEVICE_WAVEFRONT_WIDTH_AMD,
        description: "Wavefront width",
        format: InfoFormat::Uint,
        unit: "",
    },
];

/// The whole registry.
pub fn info_map() -> &'static [ParamInfo] {
    INFO_MAP
}

pub fn info_map_len() -> usize {
    INFO_MAP.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_strictly_ascending() {
        for w in INFO_MAP.windows(2) {
            let a = w[0].name.to_ascii_lowercase();
            let b = w[1].name.to_ascii_lowercase();
            assert!(a < b, "{} must sort before {}", w[0].name, w[1].name);
        }
    }

    #[test]
    fn names_are_canonical() {
        for info in INFO_MAP {
            assert_eq!(info.name, info.name.to_ascii_lowercase());
            assert!(!info.name.starts_with("cl_"), "{}", info.name);
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<_> = INFO_MAP.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), INFO_MAP.len());
        assert_eq!(info_map_len(), 96);
    }

    #[test]
    fn every_format_is_used() {
        let used: HashSet<_> = info_map().iter().map(|i| i.format).collect();
        assert_eq!(used.len(), 18);
    }
}
