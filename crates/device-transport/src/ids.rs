//! Raw identifier codes understood by the device information query call.
//!
//! Core codes occupy `0x1000..0x104A`; vendor extension codes live at `0x4000` and up.

use crate::ParamId;

pub const DEVICE_TYPE: ParamId = ParamId::new(0x1000);
pub const DEVICE_VENDOR_ID: ParamId = ParamId::new(0x1001);
pub const DEVICE_MAX_COMPUTE_UNITS: ParamId = ParamId::new(0x1002);
pub const DEVICE_MAX_WORK_ITEM_DIMENSIONS: ParamId = ParamId::new(0x1003);
pub const DEVICE_MAX_WORK_GROUP_SIZE: ParamId = ParamId::new(0x1004);
pub const DEVICE_MAX_WORK_ITEM_SIZES: ParamId = ParamId::new(0x1005);
pub const DEVICE_PREFERRED_VECTOR_WIDTH_CHAR: ParamId = ParamId::new(0x1006);
pub const DEVICE_PREFERRED_VECTOR_WIDTH_SHORT: ParamId = ParamId::new(0x1007);
pub const DEVICE_PREFERRED_VECTOR_WIDTH_INT: ParamId = ParamId::new(0x1008);
pub const DEVICE_PREFERRED_VECTOR_WIDTH_LONG: ParamId = ParamId::new(0x1009);
pub const DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT: ParamId = ParamId::new(0x100A);
pub const DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE: ParamId = ParamId::new(0x100B);
pub const DEVICE_MAX_CLOCK_FREQUENCY: ParamId = ParamId::new(0x100C);
pub const DEVICE_ADDRESS_BITS: ParamId = ParamId::new(0x100D);
pub const DEVICE_MAX_READ_IMAGE_ARGS: ParamId = ParamId::new(0x100E);
pub const DEVICE_MAX_WRITE_IMAGE_ARGS: ParamId = ParamId::new(0x100F);
pub const DEVICE_MAX_MEM_ALLOC_SIZE: ParamId = ParamId::new(0x1010);
pub const DEVICE_IMAGE2D_MAX_WIDTH: ParamId = ParamId::new(0x1011);
pub const DEVICE_IMAGE2D_MAX_HEIGHT: ParamId = ParamId::new(0x1012);
pub const DEVICE_IMAGE3D_MAX_WIDTH: ParamId = ParamId::new(0x1013);
pub const DEVICE_IMAGE3D_MAX_HEIGHT: ParamId = ParamId::new(0x1014);
pub const DEVICE_IMAGE3D_MAX_DEPTH: ParamId = ParamId::new(0x1015);
pub const DEVICE_IMAGE_SUPPORT: ParamId = ParamId::new(0x1016);
pub const DEVICE_MAX_PARAMETER_SIZE: ParamId = ParamId::new(0x1017);
pub const DEVICE_MAX_SAMPLERS: ParamId = ParamId::new(0x1018);
pub const DEVICE_MEM_BASE_ADDR_ALIGN: ParamId = ParamId::new(0x1019);
pub const DEVICE_MIN_DATA_TYPE_ALIGN_SIZE: ParamId = ParamId::new(0x101A);
pub const DEVICE_SINGLE_FP_CONFIG: ParamId = ParamId::new(0x101B);
pub const DEVICE_GLOBAL_MEM_CACHE_TYPE: ParamId = ParamId::new(0x101C);
pub const DEVICE_GLOBAL_MEM_CACHELINE_SIZE: ParamId = ParamId::new(0x101D);
pub const DEVICE_GLOBAL_MEM_CACHE_SIZE: ParamId = ParamId::new(0x101E);
pub const DEVICE_GLOBAL_MEM_SIZE: ParamId = ParamId::new(0x101F);
pub const DEVICE_MAX_CONSTANT_BUFFER_SIZE: ParamId = ParamId::new(0x1020);
pub const DEVICE_MAX_CONSTANT_ARGS: ParamId = ParamId::new(0x1021);
pub const DEVICE_LOCAL_MEM_TYPE: ParamId = ParamId::new(0x1022);
pub const DEVICE_LOCAL_MEM_SIZE: ParamId = ParamId::new(0x1023);
pub const DEVICE_ERROR_CORRECTION_SUPPORT: ParamId = ParamId::new(0x1024);
pub const DEVICE_PROFILING_TIMER_RESOLUTION: ParamId = ParamId::new(0x1025);
pub const DEVICE_ENDIAN_LITTLE: ParamId = ParamId::new(0x1026);
pub const DEVICE_AVAILABLE: ParamId = ParamId::new(0x1027);
pub const DEVICE_COMPILER_AVAILABLE: ParamId = ParamId::new(0x1028);
pub const DEVICE_EXECUTION_CAPABILITIES: ParamId = ParamId::new(0x1029);
pub const DEVICE_QUEUE_PROPERTIES: ParamId = ParamId::new(0x102A);
pub const DEVICE_NAME: ParamId = ParamId::new(0x102B);
pub const DEVICE_VENDOR: ParamId = ParamId::new(0x102C);
pub const DRIVER_VERSION: ParamId = ParamId::new(0x102D);
pub const DEVICE_PROFILE: ParamId = ParamId::new(0x102E);
pub const DEVICE_VERSION: ParamId = ParamId::new(0x102F);
pub const DEVICE_EXTENSIONS: ParamId = ParamId::new(0x1030);
pub const DEVICE_PLATFORM: ParamId = ParamId::new(0x1031);
pub const DEVICE_DOUBLE_FP_CONFIG: ParamId = ParamId::new(0x1032);
pub const DEVICE_HALF_FP_CONFIG: ParamId = ParamId::new(0x1033);
pub const DEVICE_PREFERRED_VECTOR_WIDTH_HALF: ParamId = ParamId::new(0x1034);
pub const DEVICE_HOST_UNIFIED_MEMORY: ParamId = ParamId::new(0x1035);
pub const DEVICE_NATIVE_VECTOR_WIDTH_CHAR: ParamId = ParamId::new(0x1036);
pub const DEVICE_NATIVE_VECTOR_WIDTH_SHORT: ParamId = ParamId::new(0x1037);
pub const DEVICE_NATIVE_VECTOR_WIDTH_INT: ParamId = ParamId::new(0x1038);
pub const DEVICE_NATIVE_VECTOR_WIDTH_LONG: ParamId = ParamId::new(0x1039);
pub const DEVICE_NATIVE_VECTOR_WIDTH_FLOAT: ParamId = ParamId::new(0x103A);
pub const DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE: ParamId = ParamId::new(0x103B);
pub const DEVICE_NATIVE_VECTOR_WIDTH_HALF: ParamId = ParamId::new(0x103C);
pub const DEVICE_OPENCL_C_VERSION: ParamId = ParamId::new(0x103D);
pub const DEVICE_LINKER_AVAILABLE: ParamId = ParamId::new(0x103E);
pub const DEVICE_BUILT_IN_KERNELS: ParamId = ParamId::new(0x103F);
pub const DEVICE_IMAGE_MAX_BUFFER_SIZE: ParamId = ParamId::new(0x1040);
pub const DEVICE_IMAGE_MAX_ARRAY_SIZE: ParamId = ParamId::new(0x1041);
pub const DEVICE_PARENT_DEVICE: ParamId = ParamId::new(0x1042);
pub const DEVICE_PARTITION_MAX_SUB_DEVICES: ParamId = ParamId::new(0x1043);
pub const DEVICE_PARTITION_PROPERTIES: ParamId = ParamId::new(0x1044);
pub const DEVICE_PARTITION_AFFINITY_DOMAIN: ParamId = ParamId::new(0x1045);
pub const DEVICE_PARTITION_TYPE: ParamId = ParamId::new(0x1046);
pub const DEVICE_REFERENCE_COUNT: ParamId = ParamId::new(0x1047);
pub const DEVICE_PREFERRED_INTEROP_USER_SYNC: ParamId = ParamId::new(0x1048);
pub const DEVICE_PRINTF_BUFFER_SIZE: ParamId = ParamId::new(0x1049);

// NVIDIA extension
pub const DEVICE_COMPUTE_CAPABILITY_MAJOR_NV: ParamId = ParamId::new(0x4000);
pub const DEVICE_COMPUTE_CAPABILITY_MINOR_NV: ParamId = ParamId::new(0x4001);
pub const DEVICE_REGISTERS_PER_BLOCK_NV: ParamId = ParamId::new(0x4002);
pub const DEVICE_WARP_SIZE_NV: ParamId = ParamId::new(0x4003);
pub const DEVICE_GPU_OVERLAP_NV: ParamId = ParamId::new(0x4004);
pub const DEVICE_KERNEL_EXEC_TIMEOUT_NV: ParamId = ParamId::new(0x4005);
pub const DEVICE_INTEGRATED_MEMORY_NV: ParamId = ParamId::new(0x4006);

pub const DEVICE_MAX_ATOMIC_COUNTERS_EXT: ParamId = ParamId::new(0x4032);

// AMD extension
pub const DEVICE_PROFILING_TIMER_OFFSET_AMD: ParamId = ParamId::new(0x4036);
pub const DEVICE_TOPOLOGY_AMD: ParamId = ParamId::new(0x4037);
pub const DEVICE_BOARD_NAME_AMD: ParamId = ParamId::new(0x4038);
pub const DEVICE_GLOBAL_FREE_MEMORY_AMD: ParamId = ParamId::new(0x4039);
pub const DEVICE_SIMD_PER_COMPUTE_UNIT_AMD: ParamId = ParamId::new(0x4040);
pub const DEVICE_SIMD_WIDTH_AMD: ParamId = ParamId::new(0x4041);
pub const DEVICE_SIMD_INSTRUCTION_WIDTH_AMD: ParamId = ParamId::new(0x4042);
pub const DEVICE_WAVEFRONT_WIDTH_AMD: ParamId = ParamId::new(0x4043);
pub const DEVICE_GLOBAL_MEM_CHANNELS_AMD: ParamId = ParamId::new(0x4044);
pub const DEVICE_GLOBAL_MEM_CHANNEL_BANKS_AMD: ParamId = ParamId::new(0x4045);
pub const DEVICE_GLOBAL_MEM_CHANNEL_BANK_WIDTH_AMD: ParamId = ParamId::new(0x4046);
pub const DEVICE_LOCAL_MEM_SIZE_PER_COMPUTE_UNIT_AMD: ParamId = ParamId::new(0x4047);
pub const DEVICE_LOCAL_MEM_BANKS_AMD: ParamId = ParamId::new(0x4048);
pub const DEVICE_THREAD_TRACE_SUPPORTED_AMD: ParamId = ParamId::new(0x4049);

// Partition property codes carried inside DEVICE_PARTITION_PROPERTIES values.
pub const PARTITION_EQUALLY: isize = 0x1086;
pub const PARTITION_BY_COUNTS: isize = 0x1087;
pub const PARTITION_BY_AFFINITY_DOMAIN: isize = 0x1088;
pub const PARTITION_EQUALLY_EXT: isize = 0x4050;
pub const PARTITION_BY_COUNTS_EXT: isize = 0x4051;
pub const PARTITION_BY_NAMES_EXT: isize = 0x4052;
pub const PARTITION_BY_AFFINITY_DOMAIN_EXT: isize = 0x4053;
